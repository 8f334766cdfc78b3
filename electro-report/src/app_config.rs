use std::env;

use electro_catalog::{ExtrasCapacity, ItemType};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub capacities: CapacityOverrides,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// Per-type replacements for the default extras capacity
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CapacityOverrides {
    pub console: Option<ExtrasCapacity>,
    pub television: Option<ExtrasCapacity>,
    pub microwave: Option<ExtrasCapacity>,
    pub controller: Option<ExtrasCapacity>,
}

impl CapacityOverrides {
    pub fn get(&self, kind: ItemType) -> Option<ExtrasCapacity> {
        match kind {
            ItemType::Console => self.console,
            ItemType::Television => self.television,
            ItemType::Microwave => self.microwave,
            ItemType::Controller => self.controller,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A seeded item; extras use the same shape.
#[derive(Debug, Deserialize, Clone)]
pub struct ItemDefinition {
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub price: f64,
    #[serde(default)]
    pub wired: Option<bool>,
    #[serde(default)]
    pub extras: Vec<ItemDefinition>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment and local overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?;

        s.try_deserialize()
    }

    /// Layers `ELECTRO__*` variables from `vars` over an inline TOML document.
    pub fn from_toml_with_env(
        toml: &str,
        vars: config::Map<String, String>,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .add_source(environment().source(Some(vars)))
            .build()?
            .try_deserialize()
    }

    /// Builds a config from an inline TOML document, skipping files and environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Capacity for `kind`: the configured override, else the type default.
    pub fn extras_capacity(&self, kind: ItemType) -> Option<ExtrasCapacity> {
        self.capacities
            .get(kind)
            .or_else(|| kind.default_extras_capacity())
    }
}

/// Eg.. `ELECTRO__REPORT__FORMAT=json` or `ELECTRO__CAPACITIES__CONSOLE=2`.
/// Values are parsed, so numeric capacities arrive as integers.
fn environment() -> config::Environment {
    config::Environment::with_prefix("ELECTRO")
        .separator("__")
        .try_parsing(true)
}
