//! # Ledger Error Types
//!
//! `LedgerError` is the public error contract for every mutating operation
//! of the submission ledger. Variants are non-overlapping: each has a
//! distinct semantic meaning and a distinct retry policy for callers:
//!
//! | Variant | Meaning | Retryable |
//! |---------|---------|-----------|
//! | `NotFound` | unknown submission id | no |
//! | `InvalidState` | status precondition violated (already finalized) | no |
//! | `Unauthorized` | actor lacks the required role | no |
//! | `InvalidEvidence` | required evidence reference is empty | no (fix input) |
//! | `FeeRequired` | enabled fee was not supplied in full | no (fix input) |
//!
//! Soft signals are NOT errors and never appear here: an exhausted reserve
//! is reported as `ReserveStatus::Exhausted` on a successful approval, and a
//! zero-balance claim returns `ClaimOutcome::NothingToClaim`.
//!
//! All `Display` messages are deterministic single-line strings suitable for
//! logging and operator tooling. No internal debug formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Address;

// ════════════════════════════════════════════════════════════════════════════════
// LEDGER ERROR
// ════════════════════════════════════════════════════════════════════════════════

/// Error type for all mutating ledger operations.
///
/// Every variant is terminal from the caller's perspective: the external
/// client layer must surface these as user-facing messages and must not
/// auto-retry them. Only infrastructure failures (outside this crate) are
/// retry candidates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerError {
    /// No submission exists with the given id.
    NotFound {
        /// The unknown submission id.
        id: u64,
    },

    /// The submission's status does not allow the requested operation.
    /// Raised when approving/rejecting a finalized submission or attaching
    /// recyclables outside the Pending window. Callers must treat this as
    /// "already finalized", never as transient.
    InvalidState {
        /// The submission whose status gate rejected the operation.
        id: u64,
    },

    /// The acting account does not hold the role the operation requires.
    Unauthorized {
        /// The account that attempted the operation.
        account: Address,
    },

    /// A required evidence reference was empty.
    InvalidEvidence {
        /// Name of the offending field (e.g. "before_evidence").
        field: String,
    },

    /// An enabled fee was not supplied in full.
    FeeRequired {
        /// Fee amount required by the active configuration.
        required: u128,
        /// Amount actually supplied by the caller.
        supplied: u128,
    },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::NotFound { id } => {
                write!(f, "submission {} not found", id)
            }
            LedgerError::InvalidState { id } => {
                write!(f, "submission {} is not in a state that allows this operation", id)
            }
            LedgerError::Unauthorized { account } => {
                write!(f, "account {} lacks the required role", account)
            }
            LedgerError::InvalidEvidence { field } => {
                write!(f, "required evidence reference '{}' is empty", field)
            }
            LedgerError::FeeRequired { required, supplied } => {
                write!(f, "fee required: {} but {} supplied", required, supplied)
            }
        }
    }
}

impl std::error::Error for LedgerError {}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
