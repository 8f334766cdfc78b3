pub mod app_config;
pub mod error;
pub mod report;
pub mod seed;

use electro_catalog::Catalog;

pub use app_config::{CapacityOverrides, Config, ItemDefinition, OutputFormat};
pub use error::{ReportError, ReportResult};

/// Seeds the configured items and renders them in the configured format.
pub fn run(config: &Config) -> ReportResult<String> {
    let items = seed::seed_items(config)?;
    let catalog = Catalog::new(&items);
    report::render(&catalog, config.report.format)
}
