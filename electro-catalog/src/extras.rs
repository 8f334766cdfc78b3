use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ExtrasError;
use crate::item::{Item, ItemType};

/// How many extras an item accepts once it carries an extras container.
///
/// Items without a container at all cannot take extras; that state is the
/// `None` of [`Item::extras_capacity`] and is kept apart from `Forbidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CapacitySetting", into = "CapacitySetting")]
pub enum ExtrasCapacity {
    /// A container exists but no extra may ever be attached.
    Forbidden,
    Limited(NonZeroUsize),
    Unlimited,
}

impl ExtrasCapacity {
    /// Builds a capacity from a plain count, mapping zero to `Forbidden`.
    pub fn from_count(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(limit) => ExtrasCapacity::Limited(limit),
            None => ExtrasCapacity::Forbidden,
        }
    }

    /// Upper bound on attached extras, `None` when unbounded.
    pub fn limit(&self) -> Option<usize> {
        match self {
            ExtrasCapacity::Forbidden => Some(0),
            ExtrasCapacity::Limited(limit) => Some(limit.get()),
            ExtrasCapacity::Unlimited => None,
        }
    }
}

impl fmt::Display for ExtrasCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtrasCapacity::Forbidden => write!(f, "0"),
            ExtrasCapacity::Limited(limit) => write!(f, "{}", limit),
            ExtrasCapacity::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Configuration form of a capacity: a count, a numeric string, or the
/// keyword `"unlimited"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum CapacitySetting {
    Count(usize),
    Keyword(String),
}

impl TryFrom<CapacitySetting> for ExtrasCapacity {
    type Error = String;

    fn try_from(setting: CapacitySetting) -> Result<Self, Self::Error> {
        match setting {
            CapacitySetting::Count(count) => Ok(ExtrasCapacity::from_count(count)),
            CapacitySetting::Keyword(word) if word.eq_ignore_ascii_case("unlimited") => {
                Ok(ExtrasCapacity::Unlimited)
            }
            CapacitySetting::Keyword(word) => word
                .trim()
                .parse::<usize>()
                .map(ExtrasCapacity::from_count)
                .map_err(|_| format!("invalid extras capacity: {}", word)),
        }
    }
}

impl From<ExtrasCapacity> for CapacitySetting {
    fn from(capacity: ExtrasCapacity) -> Self {
        match capacity.limit() {
            Some(count) => CapacitySetting::Count(count),
            None => CapacitySetting::Keyword("unlimited".to_string()),
        }
    }
}

/// Append-only container of extras bounded by a fixed capacity.
///
/// Serializes as the plain sequence of attached extras.
#[derive(Debug, Clone, PartialEq)]
pub struct Extras {
    capacity: ExtrasCapacity,
    items: Vec<Item>,
}

impl Extras {
    pub fn new(capacity: ExtrasCapacity) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> ExtrasCapacity {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots left before the limit, `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        self.capacity
            .limit()
            .map(|limit| limit.saturating_sub(self.items.len()))
    }

    /// Appends `extra`, refusing it once the capacity is exhausted.
    ///
    /// `owner` only labels the error.
    pub fn push(&mut self, owner: ItemType, extra: Item) -> Result<(), ExtrasError> {
        if let Some(limit) = self.capacity.limit() {
            if self.items.len() >= limit {
                return Err(ExtrasError::LimitReached {
                    kind: owner,
                    capacity: limit,
                });
            }
        }

        self.items.push(extra);
        Ok(())
    }

    /// Sum of the direct extras' own prices.
    pub fn price(&self) -> f64 {
        self.items.iter().map(Item::price).sum()
    }
}

impl Serialize for Extras {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
