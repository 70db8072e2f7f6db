//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use crate::error::DomainError;

/// Identifier of an item.
///
/// Sequential and assigned by the repository on insert; the first id handed
/// out is 1. Callers never mint these except by parsing one back from a URL.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    /// Only plain ASCII digits are accepted, so every id has one textual form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.bytes().all(|b| b.is_ascii_digit()) && (s == "0" || !s.starts_with('0'));
        if s.is_empty() || !canonical {
            return Err(DomainError::invalid_id(format!(
                "ItemId: {s:?} is not a decimal number"
            )));
        }
        let value = s
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(value))
    }
}
