//! Recyclables reserve payout and capacity sync.
//!
//! The payout runs inside the approval pipeline, after the status flip and
//! the unconditional credits. It is the one reward that can be withheld:
//! when the reserve cannot fund a full unit the approval still stands and
//! the caller sees `ReserveStatus::Exhausted`.

use tracing::{info, warn};

use cleanproof_common::categories::RewardCategory;
use cleanproof_common::economics::RECYCLABLES_UNIT_REWARD;
use cleanproof_common::errors::LedgerError;
use cleanproof_common::types::Address;

use crate::events::ReserveStatus;

use super::LedgerState;

impl LedgerState {
    /// Current reserve ceiling.
    #[must_use]
    #[inline]
    pub fn reserve_capacity(&self) -> u128 {
        self.reserve.capacity()
    }

    /// Total ever paid out of the reserve.
    #[must_use]
    #[inline]
    pub fn reserve_distributed(&self) -> u128 {
        self.reserve.distributed()
    }

    /// Reserve headroom.
    #[must_use]
    #[inline]
    pub fn reserve_remaining(&self) -> u128 {
        self.reserve.remaining()
    }

    /// Attempts the recyclables payout for an approved submission.
    ///
    /// Draw-then-credit: the reserve draw is the gate, and only a
    /// successful draw credits the submitter. Submissions without
    /// recyclables evidence are `NotApplicable`.
    pub(crate) fn payout_if_eligible(&mut self, id: u64) -> ReserveStatus {
        let Some(submission) = self.submissions.get(&id) else {
            return ReserveStatus::NotApplicable;
        };
        if !submission.has_recyclables() {
            return ReserveStatus::NotApplicable;
        }
        let submitter = submission.submitter;

        if self.reserve.try_draw(RECYCLABLES_UNIT_REWARD) {
            self.credit_category(submitter, RewardCategory::Recyclables, RECYCLABLES_UNIT_REWARD);
            ReserveStatus::Credited {
                amount: RECYCLABLES_UNIT_REWARD,
            }
        } else {
            warn!(id, remaining = self.reserve.remaining(), "recyclables reserve exhausted");
            ReserveStatus::Exhausted
        }
    }

    /// Re-seeds the reserve ceiling from an external funding confirmation.
    /// Only `DefaultAdmin`. Returns the effective capacity, which never
    /// drops below what has already been distributed.
    pub fn sync_reserve(&mut self, actor: Address, new_capacity: u128) -> Result<u128, LedgerError> {
        self.require_default_admin(actor)?;
        let effective = self.reserve.sync_capacity(new_capacity);
        info!(requested = new_capacity, effective, "reserve capacity synced");
        Ok(effective)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
