use electro_catalog::{ExtrasError, ItemType};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Item {path}: {kind} requires a wired flag")]
    MissingWired { path: String, kind: ItemType },

    #[error("Item {path}: {source}")]
    Extras {
        path: String,
        #[source]
        source: ExtrasError,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
