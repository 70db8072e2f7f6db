//! Item domain module.
//!
//! The `Item` entity plus the repository that owns every stored instance and
//! hands out sequential identifiers. No IO, no HTTP.

pub mod item;
pub mod repository;

pub use item::{Item, NewItem};
pub use repository::{InMemoryItemRepository, ItemRepository};
