//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is surfaced to the caller as-is; nothing in the domain or
/// service layer retries or recovers locally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A submitted record failed validation (missing name, price, label...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An id lookup missed.
    #[error("{0}")]
    NotFound(String),

    /// A bulk operation received an unusable argument (e.g. an empty id list).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An order could not be created (e.g. no items).
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `"<kind> with id: <id> does not exist"`.
    pub fn not_found(kind: &str, id: impl core::fmt::Display) -> Self {
        Self::NotFound(format!("{kind} with id: {id} does not exist"))
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_order(msg: impl Into<String>) -> Self {
        Self::InvalidOrder(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
