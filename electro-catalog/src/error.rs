use crate::item::ItemType;

/// Failures raised when attaching an extra to an item.
///
/// The receiving item is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtrasError {
    #[error("{kind} does not support extras")]
    Unsupported { kind: ItemType },

    #[error("{kind} extras limit reached: capacity {capacity}")]
    LimitReached { kind: ItemType, capacity: usize },
}

/// Failures raised when reading item state that was never set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("wired flag is not set for {kind}")]
    WiredUnset { kind: ItemType },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown item type: {0}")]
pub struct UnknownItemType(pub String);
