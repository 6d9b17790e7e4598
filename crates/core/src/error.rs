//! Domain error model.

use thiserror::Error;

use crate::id::EntityId;

/// Result type used across the farm domain.
pub type FarmResult<T> = Result<T, FarmError>;

/// Domain-level error.
///
/// Every entity and manager operation fails with one of these kinds. Batch
/// operations collect them instead of propagating; presentation is left to
/// the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FarmError {
    /// A non-positive amount, quantity or day count (or another malformed input).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An entity or inventory product could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    /// The entity exists but is not the kind the operation applies to.
    #[error("entity {id} is not {expected}")]
    WrongType { id: EntityId, expected: &'static str },

    /// Harvest attempted before the crop reached its maturity threshold.
    #[error("not mature yet (growth {growth}/{maturity})")]
    NotMature { growth: u32, maturity: u32 },

    /// The crop was already harvested.
    #[error("already harvested: {0}")]
    AlreadyHarvested(String),

    /// Food (or another resource) is below what the operation needs.
    #[error("insufficient resources: {0}")]
    InsufficientResources(String),

    /// The animal's health is below the species minimum.
    #[error("unhealthy: {0}")]
    Unhealthy(String),

    /// The entity cannot act again this cycle (e.g. wool still regrowing).
    #[error("not ready: {0}")]
    NotReady(String),

    /// An entity with the same identifier is already registered.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl FarmError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn wrong_type(id: EntityId, expected: &'static str) -> Self {
        Self::WrongType { id, expected }
    }

    pub fn already_harvested(msg: impl Into<String>) -> Self {
        Self::AlreadyHarvested(msg.into())
    }

    pub fn insufficient(msg: impl Into<String>) -> Self {
        Self::InsufficientResources(msg.into())
    }

    pub fn unhealthy(msg: impl Into<String>) -> Self {
        Self::Unhealthy(msg.into())
    }

    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Short, stable name of the error kind (useful for logs and tallies).
    pub fn kind(&self) -> &'static str {
        match self {
            FarmError::InvalidArgument(_) => "invalid_argument",
            FarmError::NotFound(_) => "not_found",
            FarmError::WrongType { .. } => "wrong_type",
            FarmError::NotMature { .. } => "not_mature",
            FarmError::AlreadyHarvested(_) => "already_harvested",
            FarmError::InsufficientResources(_) => "insufficient_resources",
            FarmError::Unhealthy(_) => "unhealthy",
            FarmError::NotReady(_) => "not_ready",
            FarmError::Conflict(_) => "conflict",
        }
    }
}

/// Reject non-positive inputs with `InvalidArgument`, returning the value as unsigned.
///
/// Amounts above `u32::MAX` saturate; every counter they feed is clamped or
/// saturating anyway.
pub fn ensure_positive(value: i64, what: &str) -> FarmResult<u32> {
    if value <= 0 {
        return Err(FarmError::invalid_argument(format!(
            "{what} must be greater than 0 (got {value})"
        )));
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(matches!(
            ensure_positive(0, "amount"),
            Err(FarmError::InvalidArgument(_))
        ));
        assert!(matches!(
            ensure_positive(-4, "amount"),
            Err(FarmError::InvalidArgument(_))
        ));
        assert_eq!(ensure_positive(12, "amount").unwrap(), 12);
    }

    #[test]
    fn ensure_positive_saturates_values_beyond_u32() {
        assert_eq!(ensure_positive(i64::from(u32::MAX) + 1, "quantity").unwrap(), u32::MAX);
        assert_eq!(ensure_positive(i64::MAX, "quantity").unwrap(), u32::MAX);
    }

    #[test]
    fn wrong_type_message_names_the_entity() {
        let err = FarmError::wrong_type(EntityId::from_raw(7), "a crop");
        assert_eq!(err.to_string(), "entity ENT0007 is not a crop");
    }
}
