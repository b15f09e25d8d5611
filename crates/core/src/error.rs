//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: operations report it to the caller and leave
/// the store untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed, missing or non-positive input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A unique key is already taken (e.g. product code).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// A stock exit asked for more than is on hand.
    #[error("insufficient stock (requested: {requested}, available: {available})")]
    InsufficientStock { requested: i64, available: i64 },

    /// A delete was blocked because something still references the target.
    #[error("referential integrity: {0}")]
    ReferentialIntegrity(String),

    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn referential_integrity(msg: impl Into<String>) -> Self {
        Self::ReferentialIntegrity(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Stable machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::Duplicate(_) => "duplicate",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
            DomainError::ReferentialIntegrity(_) => "referential_integrity",
            DomainError::NotFound(_) => "not_found",
        }
    }
}
