//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (missing
/// products, stock shortfalls, validation). Everything here is recoverable at
/// the call site; presentation concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A product name was not present in the catalog (or cart) it was looked
    /// up in. Several call sites treat this as a warned no-op rather than a
    /// hard failure.
    #[error("product not found: {0}")]
    NotFound(String),

    /// Checkout required more units than the catalog entry holds.
    #[error("not enough stock for {product}: requested {requested}, in stock {in_stock}")]
    InsufficientStock {
        product: String,
        requested: i64,
        in_stock: i64,
    },

    /// Credential check failed at the domain boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient_stock(product: impl Into<String>, requested: i64, in_stock: i64) -> Self {
        Self::InsufficientStock {
            product: product.into(),
            requested,
            in_stock,
        }
    }
}
