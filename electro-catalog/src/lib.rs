pub mod error;
pub mod extras;
pub mod item;
pub mod collection;
pub mod pricing;

pub use collection::Catalog;
pub use error::{ExtrasError, ItemError, UnknownItemType};
pub use extras::{Extras, ExtrasCapacity};
pub use item::{Item, ItemType};
pub use pricing::{format_price, to_cents};
