//! # Operation Outcomes & Events
//!
//! Successful mutations report structured outcomes instead of overloading
//! the error channel. Two soft signals live here:
//!
//! - `ReserveStatus::Exhausted` rides on an otherwise-successful approval:
//!   the submission is Approved, only the recyclables payout was withheld.
//! - `ClaimOutcome::NothingToClaim` is a no-op signal, not a failure.
//!
//! Callers must branch on these values; neither ever surfaces as a
//! `LedgerError`.

use serde::{Deserialize, Serialize};

use cleanproof_common::types::Address;

use crate::submission::SubmissionStatus;

// ════════════════════════════════════════════════════════════════════════════════
// VERDICT EVENT
// ════════════════════════════════════════════════════════════════════════════════

/// Emitted when a submission is finalized, carrying the new status and the
/// submitter for downstream consumers (collectible minting, leaderboards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictEvent {
    /// The finalized submission.
    pub submission_id: u64,
    /// New terminal status (Approved or Rejected).
    pub status: SubmissionStatus,
    /// The submission's owner.
    pub submitter: Address,
}

// ════════════════════════════════════════════════════════════════════════════════
// RESERVE STATUS
// ════════════════════════════════════════════════════════════════════════════════

/// Outcome of the recyclables reserve payout attempted during approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReserveStatus {
    /// The reserve funded the payout; `amount` was credited.
    Credited {
        /// Units credited to the submitter's recyclables category.
        amount: u128,
    },
    /// The reserve could not fund one more unit. The approval stands;
    /// only this reward is withheld.
    Exhausted,
    /// The submission carried no recyclables evidence.
    NotApplicable,
}

// ════════════════════════════════════════════════════════════════════════════════
// APPROVAL OUTCOME
// ════════════════════════════════════════════════════════════════════════════════

/// Full result of a successful approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalOutcome {
    /// The finalization event.
    pub event: VerdictEvent,
    /// What happened with the recyclables reserve.
    pub reserve: ReserveStatus,
}

// ════════════════════════════════════════════════════════════════════════════════
// CLAIM OUTCOME
// ════════════════════════════════════════════════════════════════════════════════

/// Result of a claim: either the aggregated amount moved to the
/// transferable balance, or there was nothing to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOutcome {
    /// All categories were drained; `amount` is their pre-drain sum.
    Claimed {
        /// Total moved to the transferable balance.
        amount: u128,
    },
    /// Every category was already zero. No state changed and no fee was
    /// collected.
    NothingToClaim,
}

impl ClaimOutcome {
    /// Amount transferred, zero for `NothingToClaim`.
    #[must_use]
    pub const fn amount(&self) -> u128 {
        match self {
            ClaimOutcome::Claimed { amount } => *amount,
            ClaimOutcome::NothingToClaim => 0,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_claim_outcome_amount() {
        assert_eq!(ClaimOutcome::Claimed { amount: 42 }.amount(), 42);
        assert_eq!(ClaimOutcome::NothingToClaim.amount(), 0);
    }

    #[test]
    fn test_reserve_status_variants_distinct() {
        let variants = [
            ReserveStatus::Credited { amount: 5 },
            ReserveStatus::Exhausted,
            ReserveStatus::NotApplicable,
        ];
        for i in 0..variants.len() {
            for j in (i + 1)..variants.len() {
                assert_ne!(variants[i], variants[j]);
            }
        }
    }

    #[test]
    fn test_verdict_event_serde_roundtrip() {
        let event = VerdictEvent {
            submission_id: 9,
            status: SubmissionStatus::Approved {
                by: addr(0x02),
                at: 1_700_000_100,
            },
            submitter: addr(0x01),
        };
        let json = serde_json::to_string(&event).expect("serialize");
        let back: VerdictEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(event, back);
    }

    #[test]
    fn test_approval_outcome_serde_roundtrip() {
        let outcome = ApprovalOutcome {
            event: VerdictEvent {
                submission_id: 0,
                status: SubmissionStatus::Approved {
                    by: addr(0x02),
                    at: 1_700_000_100,
                },
                submitter: addr(0x01),
            },
            reserve: ReserveStatus::Exhausted,
        };
        let bytes = bincode::serialize(&outcome).expect("serialize");
        let back: ApprovalOutcome = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(outcome, back);
    }
}
