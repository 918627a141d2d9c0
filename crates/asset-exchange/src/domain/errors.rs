//! # Domain Errors
//!
//! Error taxonomy for the asset exchange protocol.

use thiserror::Error;

/// Failure reported by an outbound store or bookkeeping port.
///
/// External I/O errors are carried through unmodified; the service layer
/// wraps them with the operation that was in flight.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Create a store error from any displayable cause.
    pub fn new(cause: impl ToString) -> Self {
        Self(cause.to_string())
    }
}

/// Asset exchange error types.
#[derive(Debug, Error)]
pub enum AssetExchangeError {
    /// A payload failed structural validation.
    #[error("malformed input in field `{field}`: {reason}")]
    MalformedInput {
        /// Field that failed validation.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// An ownership, maturity, or quantity precondition was not met.
    #[error("precondition failed in {operation}: {reason}")]
    PreconditionFailed {
        /// Operation that was being attempted.
        operation: &'static str,
        /// Which precondition failed.
        reason: String,
    },

    /// A lock record already exists for the asset key.
    #[error("asset already locked: {asset}")]
    AlreadyLocked {
        /// Asset identity the lock collided on.
        asset: String,
    },

    /// A lock record or lookup entry was absent.
    #[error("not found: {key}")]
    NotFound {
        /// Key or contract id that missed.
        key: String,
    },

    /// A claim was rejected; no state was mutated.
    #[error("claim rejected: {reason}")]
    ClaimRejected {
        /// Why the claim failed.
        reason: String,
    },

    /// An unlock was rejected; no state was mutated.
    #[error("unlock rejected: {reason}")]
    UnlockRejected {
        /// Why the unlock failed.
        reason: String,
    },

    /// An external store or bookkeeping call failed.
    #[error("store failure during {operation}: {source}")]
    StoreFailure {
        /// Operation that was in flight.
        operation: &'static str,
        /// The underlying I/O error, passed through unmodified.
        #[source]
        source: StoreError,
    },
}

impl AssetExchangeError {
    /// Wrap an outbound-port failure with the operation that was in flight.
    pub fn store(operation: &'static str, source: StoreError) -> Self {
        Self::StoreFailure { operation, source }
    }

    /// Shorthand for a named precondition violation.
    pub fn precondition(operation: &'static str, reason: impl ToString) -> Self {
        Self::PreconditionFailed {
            operation,
            reason: reason.to_string(),
        }
    }
}
