use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ExtrasError, ItemError, UnknownItemType};
use crate::extras::{Extras, ExtrasCapacity};

/// Item types in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Console,
    Television,
    Microwave,
    Controller,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Console,
        ItemType::Television,
        ItemType::Microwave,
        ItemType::Controller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Console => "console",
            ItemType::Television => "television",
            ItemType::Microwave => "microwave",
            ItemType::Controller => "controller",
        }
    }

    /// Extras capacity stamped by the per-type constructors.
    ///
    /// `None` means the type carries no extras container at all.
    pub fn default_extras_capacity(&self) -> Option<ExtrasCapacity> {
        match self {
            ItemType::Console => Some(ExtrasCapacity::from_count(CONSOLE_EXTRAS_LIMIT)),
            ItemType::Television => Some(ExtrasCapacity::Forbidden),
            ItemType::Microwave | ItemType::Controller => None,
        }
    }
}

const CONSOLE_EXTRAS_LIMIT: usize = 4;

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = UnknownItemType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownItemType(s.to_string()))
    }
}

/// One purchasable electronic item, optionally carrying extras.
///
/// The extras container (and with it the capacity) is fixed when the item is
/// built. Only price, type and wired flag can change afterwards.
///
/// A clone is an independent deep copy, extras included, that keeps the same
/// `id`. Build a fresh item with a constructor when a distinct identity is
/// needed, e.g. before attaching the same kind of extra to a second parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: Uuid,
    #[serde(rename = "type")]
    kind: ItemType,
    price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    wired: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extras: Option<Extras>,
}

impl Item {
    /// Builds an item of any type with an explicit extras capacity.
    ///
    /// # Arguments
    /// * `kind` - Type tag, fixed for the lifetime of the item
    /// * `price` - Unit price; not validated
    /// * `capacity` - `None` for an item that cannot take extras at all
    pub fn new(kind: ItemType, price: f64, capacity: Option<ExtrasCapacity>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            price,
            wired: None,
            extras: capacity.map(Extras::new),
        }
    }

    pub fn console(price: f64) -> Self {
        Self::new(ItemType::Console, price, ItemType::Console.default_extras_capacity())
    }

    pub fn television(price: f64) -> Self {
        Self::new(
            ItemType::Television,
            price,
            ItemType::Television.default_extras_capacity(),
        )
    }

    pub fn microwave(price: f64) -> Self {
        Self::new(ItemType::Microwave, price, ItemType::Microwave.default_extras_capacity())
    }

    pub fn controller(price: f64, wired: bool) -> Self {
        let mut item = Self::new(
            ItemType::Controller,
            price,
            ItemType::Controller.default_extras_capacity(),
        );
        item.wired = Some(wired);
        item
    }

    /// Replaces the extras capacity while the item is still being built.
    ///
    /// Starts an empty container, so it belongs right after a constructor.
    pub fn with_extras_capacity(mut self, capacity: ExtrasCapacity) -> Self {
        self.extras = Some(Extras::new(capacity));
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Replaces the price. Negative values are accepted as-is.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn item_type(&self) -> ItemType {
        self.kind
    }

    pub fn set_type(&mut self, kind: ItemType) {
        self.kind = kind;
    }

    pub fn is_wired(&self) -> Result<bool, ItemError> {
        self.wired.ok_or(ItemError::WiredUnset { kind: self.kind })
    }

    pub fn set_wired(&mut self, wired: bool) {
        self.wired = Some(wired);
    }

    pub fn supports_extras(&self) -> bool {
        self.extras.is_some()
    }

    pub fn extras_capacity(&self) -> Option<ExtrasCapacity> {
        self.extras.as_ref().map(Extras::capacity)
    }

    /// Direct extras in attachment order; empty when extras are unsupported.
    pub fn extras(&self) -> &[Item] {
        self.extras.as_ref().map(Extras::items).unwrap_or(&[])
    }

    /// Attaches `extra` at the end of this item's extras.
    ///
    /// # Errors
    /// - `Unsupported` when the item has no extras container
    /// - `LimitReached` when the capacity is forbidden or exhausted
    pub fn add_extra(&mut self, extra: Item) -> Result<(), ExtrasError> {
        let kind = self.kind;
        let extras = self
            .extras
            .as_mut()
            .ok_or(ExtrasError::Unsupported { kind })?;

        let extra_kind = extra.kind;
        extras.push(kind, extra)?;

        tracing::debug!(
            item_id = %self.id,
            item_type = %kind,
            extra_type = %extra_kind,
            "Attached extra"
        );
        Ok(())
    }

    /// Sum of the direct extras' prices; 0 when there are none.
    pub fn extras_price(&self) -> f64 {
        self.extras.as_ref().map(Extras::price).unwrap_or(0.0)
    }

    /// Own price plus direct extras. Extras of extras are not included.
    pub fn total_price(&self) -> f64 {
        self.price + self.extras_price()
    }
}
