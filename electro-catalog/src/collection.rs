use serde::Serialize;

use crate::item::{Item, ItemType};

/// Ordered view over top-level items.
///
/// The catalog borrows its items, so it always reflects their current state
/// and never copies them. Insertion order is preserved.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog<'a> {
    items: Vec<&'a Item>,
}

impl<'a> Catalog<'a> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let items: Vec<&'a Item> = items.into_iter().collect();
        tracing::debug!(top_level = items.len(), "Catalog created");
        Self { items }
    }

    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top-level items followed by their direct extras, sorted ascending by price.
    ///
    /// Only one level is flattened. The sort is stable: equal prices keep the
    /// order parent, then its extras, in catalog order.
    pub fn sorted_by_price(&self) -> Vec<&'a Item> {
        let mut flattened: Vec<&'a Item> = Vec::with_capacity(self.flattened_len());
        for &item in &self.items {
            flattened.push(item);
            flattened.extend(item.extras());
        }

        flattened.sort_by(|a, b| a.price().total_cmp(&b.price()));
        flattened
    }

    /// Top-level items of the given type, in catalog order. Extras are not searched.
    pub fn items_by_type(&self, kind: ItemType) -> Vec<&'a Item> {
        self.items
            .iter()
            .copied()
            .filter(|item| item.item_type() == kind)
            .collect()
    }

    /// Same as [`Catalog::items_by_type`] keyed by the lowercase type name.
    ///
    /// An unrecognized name yields an empty list rather than an error.
    pub fn items_by_type_name(&self, name: &str) -> Vec<&'a Item> {
        match name.parse::<ItemType>() {
            Ok(kind) => self.items_by_type(kind),
            Err(_) => Vec::new(),
        }
    }

    /// Sum of every top-level item's total; each extra counts once via its parent.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.total_price()).sum()
    }

    fn flattened_len(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.extras().len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extras::ExtrasCapacity;

    fn tv_with_extras(price: f64, extras: &[f64]) -> Item {
        let mut tv = Item::television(price).with_extras_capacity(ExtrasCapacity::Unlimited);
        for extra in extras {
            tv.add_extra(Item::controller(*extra, false)).unwrap();
        }
        tv
    }

    #[test]
    fn test_sorted_by_price_flattens_one_level() {
        let mut nested = Item::console(50.0);
        nested.add_extra(Item::controller(1.0, true)).unwrap();

        let mut console = Item::console(300.0);
        console.add_extra(nested).unwrap();
        console.add_extra(Item::controller(20.0, false)).unwrap();
        let microwave = Item::microwave(100.0);

        let catalog = Catalog::new([&console, &microwave]);
        let prices: Vec<f64> = catalog.sorted_by_price().iter().map(|i| i.price()).collect();

        // The 1.0 controller sits two levels down and is left out.
        assert_eq!(prices, vec![20.0, 50.0, 100.0, 300.0]);
    }

    #[test]
    fn test_sorted_by_price_is_stable() {
        let tv = tv_with_extras(10.0, &[10.0, 5.0]);
        let microwave = Item::microwave(10.0);
        let catalog = Catalog::new([&tv, &microwave]);

        let sorted = catalog.sorted_by_price();
        let ids: Vec<_> = sorted.iter().map(|i| i.id()).collect();
        assert_eq!(
            ids,
            vec![tv.extras()[1].id(), tv.id(), tv.extras()[0].id(), microwave.id()]
        );
    }

    #[test]
    fn test_items_by_type() {
        let first = Item::console(1.0);
        let tv = tv_with_extras(2.0, &[3.0]);
        let second = Item::console(4.0);
        let catalog = Catalog::new([&first, &tv, &second]);

        let consoles = catalog.items_by_type(ItemType::Console);
        assert_eq!(consoles.len(), 2);
        assert_eq!(consoles[0].id(), first.id());
        assert_eq!(consoles[1].id(), second.id());

        // Controllers exist only as extras.
        assert!(catalog.items_by_type(ItemType::Controller).is_empty());
        assert_eq!(catalog.items_by_type_name("television").len(), 1);
        assert!(catalog.items_by_type_name("bogus").is_empty());
    }

    #[test]
    fn test_total_price_counts_extras_once() {
        let tv = tv_with_extras(100.0, &[10.0, 20.0]);
        let microwave = Item::microwave(50.0);
        let catalog = Catalog::new([&tv, &microwave]);

        assert!((catalog.total_price() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(std::iter::empty());
        assert!(catalog.is_empty());
        assert!(catalog.sorted_by_price().is_empty());
        assert_eq!(catalog.total_price(), 0.0);
    }
}
