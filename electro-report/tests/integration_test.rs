use electro_report::{run, Config, OutputFormat, ReportError};

const SHOWROOM: &str = include_str!("../../config/default.toml");

#[test]
fn test_showroom_text_report() {
    let config = Config::from_toml_str(SHOWROOM).expect("Failed to parse showroom config");
    assert_eq!(config.report.format, OutputFormat::Text);

    let output = run(&config).unwrap();
    let expected = "\
controller: 9.13
controller: 12.34
controller: 21.12
controller: 23.45
controller: 34.97
controller: 46.65
controller: 53.19
microwave: 191.89
television: 379.99
television: 456.78
console: 499.99

TOTAL: 1,729.50
Console with controllers costs: 655.92
";
    assert_eq!(output, expected);
}

#[test]
fn test_showroom_json_report() {
    let toml = SHOWROOM.replace("format = \"text\"", "format = \"json\"");
    let config = Config::from_toml_str(&toml).unwrap();

    let output = run(&config).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["lines"].as_array().unwrap().len(), 11);
    assert_eq!(json["lines"][0]["type"], "controller");
    assert_eq!(json["lines"][0]["display"], "9.13");
    assert_eq!(json["lines"][10]["type"], "console");
    assert_eq!(json["total_display"], "1,729.50");
    assert_eq!(json["consoles"][0]["display"], "655.92");
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_showroom_without_television_override_fails() {
    let toml = SHOWROOM.replace("television = \"unlimited\"", "");
    let config = Config::from_toml_str(&toml).unwrap();

    match run(&config) {
        Err(ReportError::Extras { path, .. }) => assert_eq!(path, "items[1].extras[0]"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_fifth_console_extra_fails() {
    let config = Config::from_toml_str(
        r#"
        [[items]]
        type = "console"
        price = 499.99
        extras = [
            { type = "controller", price = 1.0, wired = false },
            { type = "controller", price = 2.0, wired = false },
            { type = "controller", price = 3.0, wired = false },
            { type = "controller", price = 4.0, wired = false },
            { type = "controller", price = 5.0, wired = false },
        ]
        "#,
    )
    .unwrap();

    let err = run(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Item items[0].extras[4]: console extras limit reached: capacity 4"
    );
}
