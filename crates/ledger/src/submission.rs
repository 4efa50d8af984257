//! # Submission Record & Status State Machine
//!
//! A `Submission` is a single cleanup report moving through a one-way
//! lifecycle. The status is a closed tagged variant with transition
//! functions, not a settable field, so illegal transitions are
//! unrepresentable rather than merely checked.
//!
//! ## State Machine
//!
//! ```text
//! Pending → Approve → Approved   (terminal)
//!    │
//!    └──── Reject  → Rejected    (terminal)
//! ```
//!
//! No transition leaves a terminal state. Whichever caller is ordered first
//! wins; the loser observes an invalid-transition error and must not retry.

use std::fmt;

use serde::{Deserialize, Serialize};

use cleanproof_common::types::{Address, EvidenceRef, GeoPoint, Timestamp};

// ════════════════════════════════════════════════════════════════════════════════
// ERROR TYPE
// ════════════════════════════════════════════════════════════════════════════════

/// Error type for invalid submission status transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTransitionError {
    /// The transition is not valid from the current status.
    InvalidTransition {
        /// Name of the current status.
        from: &'static str,
        /// Name of the attempted transition.
        transition: &'static str,
    },
}

impl fmt::Display for StatusTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusTransitionError::InvalidTransition { from, transition } => {
                write!(
                    f,
                    "invalid status transition: cannot apply '{}' from '{}'",
                    transition, from
                )
            }
        }
    }
}

impl std::error::Error for StatusTransitionError {}

// ════════════════════════════════════════════════════════════════════════════════
// STATUS TRANSITION
// ════════════════════════════════════════════════════════════════════════════════

/// Transition applied to a submission status via `apply_transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    /// Finalizes the submission as verified (Pending → Approved).
    Approve {
        /// The verifier or admin who approved.
        by: Address,
        /// Approval timestamp.
        at: Timestamp,
    },

    /// Finalizes the submission as rejected (Pending → Rejected).
    Reject {
        /// The verifier or admin who rejected.
        by: Address,
        /// Rejection timestamp.
        at: Timestamp,
    },
}

impl StatusTransition {
    /// Name of the transition.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            StatusTransition::Approve { .. } => "approve",
            StatusTransition::Reject { .. } => "reject",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// SUBMISSION STATUS
// ════════════════════════════════════════════════════════════════════════════════

/// Lifecycle status of a submission.
///
/// Pending is the only initial state. Approved and Rejected are terminal:
/// there is no transition out of either, and each can be entered exactly
/// once. To change status, use `apply_transition`, which produces a new
/// status or fails without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Awaiting verification.
    Pending,

    /// Verified; rewards have been triggered.
    Approved {
        /// The account that approved.
        by: Address,
        /// Approval timestamp.
        at: Timestamp,
    },

    /// Declined; no reward side effects, terminal.
    Rejected {
        /// The account that rejected.
        by: Address,
        /// Rejection timestamp.
        at: Timestamp,
    },
}

impl SubmissionStatus {
    #[must_use]
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    #[must_use]
    #[inline]
    pub const fn is_approved(&self) -> bool {
        matches!(self, SubmissionStatus::Approved { .. })
    }

    #[must_use]
    #[inline]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, SubmissionStatus::Rejected { .. })
    }

    /// Terminal means no further transition is possible.
    #[must_use]
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Name of the status as a stable string.
    #[must_use]
    pub const fn status_name(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved { .. } => "approved",
            SubmissionStatus::Rejected { .. } => "rejected",
        }
    }

    /// Applies a transition.
    ///
    /// # Valid Transitions
    ///
    /// - Pending → Approve → Approved
    /// - Pending → Reject → Rejected
    ///
    /// Anything else returns `StatusTransitionError` and the caller's state
    /// is untouched (the method consumes a copy, not the stored value).
    pub fn apply_transition(
        self,
        transition: StatusTransition,
    ) -> Result<SubmissionStatus, StatusTransitionError> {
        match (&self, &transition) {
            (SubmissionStatus::Pending, StatusTransition::Approve { by, at }) => {
                Ok(SubmissionStatus::Approved { by: *by, at: *at })
            }
            (SubmissionStatus::Pending, StatusTransition::Reject { by, at }) => {
                Ok(SubmissionStatus::Rejected { by: *by, at: *at })
            }
            _ => Err(StatusTransitionError::InvalidTransition {
                from: self.status_name(),
                transition: transition.name(),
            }),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// RECYCLABLES ATTACHMENT
// ════════════════════════════════════════════════════════════════════════════════

/// Optional recyclables evidence pair, settable once while Pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecyclablesAttachment {
    /// Photo evidence of the collected recyclables.
    pub photo: EvidenceRef,
    /// Drop-off or weigh-in receipt.
    pub receipt: EvidenceRef,
}

// ════════════════════════════════════════════════════════════════════════════════
// SUBMISSION
// ════════════════════════════════════════════════════════════════════════════════

/// A single cleanup report in the append-only submission log.
///
/// All fields except `status`, `recyclables` and `rewarded` are immutable
/// after creation. `recyclables` is single-assignment while Pending.
/// `rewarded` flips to true exactly once, when the base reward is credited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Monotonic id assigned at creation, starting at 0.
    pub id: u64,
    /// The account that created the submission.
    pub submitter: Address,
    /// Evidence of the site before cleanup.
    pub before_evidence: EvidenceRef,
    /// Evidence of the site after cleanup.
    pub after_evidence: EvidenceRef,
    /// Optional recyclables evidence, attached while Pending.
    pub recyclables: Option<RecyclablesAttachment>,
    /// Optional impact report reference, set at creation.
    pub impact_report: Option<EvidenceRef>,
    /// Optional referrer recorded at creation; receives the referral reward.
    pub referrer: Option<Address>,
    /// Cleanup site location.
    pub location: GeoPoint,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Lifecycle status.
    pub status: SubmissionStatus,
    /// Set true exactly once when the base reward is credited.
    pub rewarded: bool,
}

impl Submission {
    /// Builds a fresh Pending submission. Field validation (non-empty
    /// evidence, fees) happens at the ledger boundary, not here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        submitter: Address,
        before_evidence: EvidenceRef,
        after_evidence: EvidenceRef,
        location: GeoPoint,
        impact_report: Option<EvidenceRef>,
        referrer: Option<Address>,
        created_at: Timestamp,
    ) -> Self {
        Submission {
            id,
            submitter,
            before_evidence,
            after_evidence,
            recyclables: None,
            impact_report,
            referrer,
            location,
            created_at,
            status: SubmissionStatus::Pending,
            rewarded: false,
        }
    }

    /// Whether recyclables evidence is attached.
    #[must_use]
    #[inline]
    pub fn has_recyclables(&self) -> bool {
        self.recyclables.is_some()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
