//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU32;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Positive integer, unique within the catalog. Zero is not a valid id, so
/// the representation is `NonZeroU32` and a `0` in a request body fails at
/// the serde boundary rather than deep in a handler.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(NonZeroU32);

impl ProductId {
    /// Create an identifier from a raw integer; rejects zero.
    pub fn new(raw: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id("ProductId: must be a positive integer"))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .parse()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Self::new(raw)
    }
}
