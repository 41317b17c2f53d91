//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic, recoverable outcome. A store operation that
/// returns one of these has left its state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (malformed input at the boundary).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (zero, or not a number).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No item exists with the requested id.
    #[error("item {id} not found")]
    NotFound { id: ItemId },

    /// A quantity removal asked for more than is on hand.
    #[error("cannot remove {requested} from item {id}: only {available} available")]
    InsufficientQuantity {
        id: ItemId,
        requested: u64,
        available: u64,
    },

    /// The primary map and the category rankings disagree.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound { id }
    }

    pub fn insufficient(id: ItemId, requested: u64, available: u64) -> Self {
        Self::InsufficientQuantity {
            id,
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_quantity_message_names_both_amounts() {
        let id = ItemId::new(3).unwrap();
        let err = DomainError::insufficient(id, 7, 2);
        assert_eq!(
            err.to_string(),
            "cannot remove 7 from item 3: only 2 available"
        );
    }

    #[test]
    fn not_found_message_names_the_id() {
        let id = ItemId::new(42).unwrap();
        assert_eq!(DomainError::not_found(id).to_string(), "item 42 not found");
    }
}
