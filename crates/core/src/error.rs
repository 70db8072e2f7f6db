//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// A lookup or update against an identifier the repository never assigned
/// (or has since cleared) is always `ItemNotFound`; it is never a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No item is stored under the identifier.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn item_not_found(id: ItemId) -> Self {
        Self::ItemNotFound(id)
    }
}
