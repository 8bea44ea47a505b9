//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic domain failures live here. Collaborator failures
/// (asset fetch/decode, script injection) are owned by the collaborator and
/// never wrapped into this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A submission or draft failed boundary validation (e.g. missing
    /// required fields, empty image set).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (parse failure, zero).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record is absent from the catalog. Callers render a
    /// not-found state; this is never a process fault.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
