use electro_catalog::{Item, ItemType};

use crate::app_config::{Config, ItemDefinition};
use crate::error::{ReportError, ReportResult};

/// Builds every top-level item in `config.items`, in order.
///
/// Items go through `Item::new` and `add_extra` like any caller's, so every
/// capacity rule applies to seeded data too.
pub fn seed_items(config: &Config) -> ReportResult<Vec<Item>> {
    let items = config
        .items
        .iter()
        .enumerate()
        .map(|(index, definition)| build_item(config, definition, &format!("items[{}]", index)))
        .collect::<ReportResult<Vec<_>>>()?;

    tracing::info!(count = items.len(), "Seeded catalog items");
    Ok(items)
}

/// Builds one item and attaches its extras. `path` locates it in error messages.
pub fn build_item(config: &Config, definition: &ItemDefinition, path: &str) -> ReportResult<Item> {
    let kind = definition.kind;
    let mut item = Item::new(kind, definition.price, config.extras_capacity(kind));
    match (kind, definition.wired) {
        (_, Some(wired)) => item.set_wired(wired),
        (ItemType::Controller, None) => {
            return Err(ReportError::MissingWired {
                path: path.to_string(),
                kind,
            })
        }
        _ => {}
    }

    for (index, extra) in definition.extras.iter().enumerate() {
        let extra_path = format!("{}.extras[{}]", path, index);
        let extra = build_item(config, extra, &extra_path)?;
        item.add_extra(extra).map_err(|source| ReportError::Extras {
            path: extra_path,
            source,
        })?;
    }

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use electro_catalog::{ExtrasCapacity, ExtrasError};

    #[test]
    fn test_seed_applies_overrides() {
        let config = Config::from_toml_str(
            r#"
            [capacities]
            television = "unlimited"

            [[items]]
            type = "television"
            price = 379.99
            extras = [
                { type = "controller", price = 12.34, wired = false },
                { type = "controller", price = 23.45, wired = false },
            ]
            "#,
        )
        .unwrap();

        let items = seed_items(&config).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].extras_capacity(), Some(ExtrasCapacity::Unlimited));
        assert_eq!(items[0].extras().len(), 2);
        assert_eq!(items[0].extras()[1].is_wired(), Ok(false));
    }

    #[test]
    fn test_seed_reports_rejected_extra() {
        let config = Config::from_toml_str(
            r#"
            [[items]]
            type = "microwave"
            price = 191.89

            [[items]]
            type = "television"
            price = 379.99
            extras = [{ type = "controller", price = 12.34, wired = false }]
            "#,
        )
        .unwrap();

        match seed_items(&config) {
            Err(ReportError::Extras { path, source }) => {
                assert_eq!(path, "items[1].extras[0]");
                assert!(matches!(source, ExtrasError::LimitReached { capacity: 0, .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_seed_requires_controller_wiring() {
        let config = Config::from_toml_str(
            r#"
            [[items]]
            type = "controller"
            price = 9.13
            "#,
        )
        .unwrap();

        assert!(matches!(
            seed_items(&config),
            Err(ReportError::MissingWired {
                kind: ItemType::Controller,
                ..
            })
        ));
    }
}
