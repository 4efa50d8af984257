//! # Verdict Pipeline
//!
//! Finalizes a Pending submission as Approved or Rejected. The pipeline is
//! ordered so the status flip is the single gate:
//!
//! ```text
//! authorize actor ── read only
//! fetch submission ── read only
//! apply transition ── FIRST MUTATION, the atomic gate
//! credit rewards ── infallible
//! reserve payout ── infallible, soft-fails to Exhausted
//! emit event
//! ```
//!
//! Everything before the transition is read-only, so a failed call leaves
//! the state untouched. Everything after it is infallible, so a successful
//! transition always finishes the full reward set. Two racing verdicts on
//! one submission resolve at the transition: the loser gets
//! `InvalidState` and no reward runs twice.

use tracing::info;

use cleanproof_common::errors::LedgerError;
use cleanproof_common::types::{Address, Timestamp};

use crate::events::{ApprovalOutcome, VerdictEvent};
use crate::state::LedgerState;
use crate::submission::StatusTransition;

// ════════════════════════════════════════════════════════════════════════════════
// APPROVE
// ════════════════════════════════════════════════════════════════════════════════

/// Approves a Pending submission and credits all triggered rewards.
///
/// Credits: base impact to the submitter, impact-report bonus when the
/// submission carries a report, referral reward to the recorded referrer,
/// verifier incentive to `actor`, and the capped recyclables payout when
/// recyclables evidence is attached.
///
/// # Errors
///
/// - `Unauthorized` when `actor` holds neither `Admin` nor `Verifier`.
/// - `NotFound` for an unknown id.
/// - `InvalidState` when the submission is already finalized.
pub fn approve(
    state: &mut LedgerState,
    actor: Address,
    id: u64,
    now: Timestamp,
) -> Result<ApprovalOutcome, LedgerError> {
    state.require_verifier(actor)?;

    let submission = state
        .submissions
        .get_mut(&id)
        .ok_or(LedgerError::NotFound { id })?;

    let next = submission
        .status
        .apply_transition(StatusTransition::Approve { by: actor, at: now })
        .map_err(|_| LedgerError::InvalidState { id })?;
    submission.status = next;
    let submitter = submission.submitter;

    // Past the gate. Nothing below can fail.
    state.credit_on_approval(id, actor);
    let reserve = state.payout_if_eligible(id);

    info!(id, by = %actor, reserve = ?reserve, "submission approved");
    Ok(ApprovalOutcome {
        event: VerdictEvent {
            submission_id: id,
            status: next,
            submitter,
        },
        reserve,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// REJECT
// ════════════════════════════════════════════════════════════════════════════════

/// Rejects a Pending submission. No reward side effects, and a rejected
/// submission is never reconsidered.
///
/// # Errors
///
/// Same taxonomy as [`approve`].
pub fn reject(
    state: &mut LedgerState,
    actor: Address,
    id: u64,
    now: Timestamp,
) -> Result<VerdictEvent, LedgerError> {
    state.require_verifier(actor)?;

    let submission = state
        .submissions
        .get_mut(&id)
        .ok_or(LedgerError::NotFound { id })?;

    let next = submission
        .status
        .apply_transition(StatusTransition::Reject { by: actor, at: now })
        .map_err(|_| LedgerError::InvalidState { id })?;
    submission.status = next;
    let submitter = submission.submitter;

    info!(id, by = %actor, "submission rejected");
    Ok(VerdictEvent {
        submission_id: id,
        status: next,
        submitter,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
