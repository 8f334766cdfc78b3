use chrono::{DateTime, Utc};
use electro_catalog::{format_price, Catalog, Item, ItemType};
use serde::Serialize;
use uuid::Uuid;

use crate::app_config::OutputFormat;
use crate::error::ReportResult;

/// JSON view of a catalog, built by [`summarize`].
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<PriceLine>,
    pub total: f64,
    pub total_display: String,
    pub consoles: Vec<PriceLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceLine {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub price: f64,
    pub display: String,
}

impl PriceLine {
    fn new(item: &Item, price: f64) -> Self {
        Self {
            id: item.id(),
            kind: item.item_type(),
            price,
            display: format_price(price),
        }
    }
}

pub fn summarize(catalog: &Catalog<'_>) -> CatalogSummary {
    let total = catalog.total_price();
    CatalogSummary {
        generated_at: Utc::now(),
        lines: catalog
            .sorted_by_price()
            .into_iter()
            .map(|item| PriceLine::new(item, item.price()))
            .collect(),
        total,
        total_display: format_price(total),
        consoles: catalog
            .items_by_type(ItemType::Console)
            .into_iter()
            .map(|item| PriceLine::new(item, item.total_price()))
            .collect(),
    }
}

/// Renders the plain-text report.
///
/// One `<type>: <price>` line per item of the flattened price view, a blank
/// line, the catalog total, then one line per top-level console with its
/// total including extras.
pub fn render_text(catalog: &Catalog<'_>) -> String {
    let mut out = String::new();

    for item in catalog.sorted_by_price() {
        out.push_str(&format!(
            "{}: {}\n",
            item.item_type(),
            format_price(item.price())
        ));
    }

    out.push('\n');
    out.push_str(&format!("TOTAL: {}\n", format_price(catalog.total_price())));

    for console in catalog.items_by_type(ItemType::Console) {
        out.push_str(&format!(
            "Console with controllers costs: {}\n",
            format_price(console.total_price())
        ));
    }

    out
}

pub fn render_json(catalog: &Catalog<'_>) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(&summarize(catalog))?)
}

pub fn render(catalog: &Catalog<'_>, format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(catalog)),
        OutputFormat::Json => render_json(catalog),
    }
}
