/// Scale applied before the final rounding step to drop binary noise,
/// so that 1.005 rounds to 101 cents like its decimal spelling suggests.
const CENT_NOISE_SCALE: f64 = 1_000_000.0;

/// Converts a price to whole cents, rounding half away from zero.
pub fn to_cents(price: f64) -> i64 {
    let scaled = price * 100.0;
    let cleaned = (scaled * CENT_NOISE_SCALE).round() / CENT_NOISE_SCALE;
    cleaned.round() as i64
}

/// Formats a price with two decimals and comma thousands grouping.
///
/// `1729.5` renders as `"1,729.50"` and `-0.5` as `"-0.50"`.
pub fn format_price(price: f64) -> String {
    format_cents(to_cents(price))
}

pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{:02}", sign, grouped, fraction)
}
