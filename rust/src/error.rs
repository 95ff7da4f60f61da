//! Error handling and result types for TreeMap operations.
//!
//! Lookups that miss are not errors: they return `None`. The variants here
//! cover contract violations (keys outside a range view, inverted ranges),
//! cursor misuse and invalidation, and integrity failures reported by
//! [`TreeMap::validate`](crate::TreeMap::validate).

use thiserror::Error;

/// Error type for tree map operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A key passed to a range view lies outside the view's bounds.
    #[error("key is outside the bounds of this range view")]
    KeyOutOfRange,
    /// The requested bounds do not describe a valid range.
    #[error("invalid range: {0}")]
    InvalidRange(String),
    /// The map was changed by something other than this cursor.
    #[error("concurrent modification: cursor expected modification count {expected}, map is at {actual}")]
    ConcurrentModification { expected: u64, actual: u64 },
    /// The cursor has no element in the requested direction.
    #[error("no such element")]
    NoSuchElement,
    /// The operation is not allowed in the cursor's current state.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// A structural invariant does not hold.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}

impl TreeError {
    /// Create an InvalidRange error with context
    pub fn invalid_range(details: &str) -> Self {
        Self::InvalidRange(details.to_string())
    }

    /// Create an InvalidState error with context
    pub fn invalid_state(operation: &str, state: &str) -> Self {
        Self::InvalidState(format!("cannot {} {}", operation, state))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{}: {}", component, details))
    }

    /// True for errors caused by the caller breaking an API contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::KeyOutOfRange | Self::InvalidRange(_))
    }

    /// True if a cursor was invalidated by an outside change.
    pub fn is_concurrent_modification(&self) -> bool {
        matches!(self, Self::ConcurrentModification { .. })
    }
}

/// Result type for tree operations that may fail
pub type TreeResult<T> = Result<T, TreeError>;

/// Result type for mutations made through a range view
pub type ModifyResult<T> = Result<T, TreeError>;

/// Result type for cursor operations
pub type CursorResult<T> = Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TreeError::KeyOutOfRange.to_string(),
            "key is outside the bounds of this range view"
        );
        assert_eq!(
            TreeError::invalid_state("remove", "before next() or previous()").to_string(),
            "invalid state: cannot remove before next() or previous()"
        );
        let err = TreeError::ConcurrentModification {
            expected: 3,
            actual: 5,
        };
        assert!(err.to_string().contains("expected modification count 3"));
    }

    #[test]
    fn test_error_classification() {
        assert!(TreeError::KeyOutOfRange.is_contract_violation());
        assert!(TreeError::invalid_range("lower > upper").is_contract_violation());
        assert!(!TreeError::NoSuchElement.is_contract_violation());
        assert!(TreeError::ConcurrentModification {
            expected: 0,
            actual: 1
        }
        .is_concurrent_modification());
        assert!(!TreeError::corrupted_tree("root", "red").is_concurrent_modification());
    }
}
