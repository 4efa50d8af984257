//! Submission creation, recyclables attachment and read accessors.
//!
//! Creation is the only place ids are assigned. Validation order is fixed:
//! evidence first, then the fee gate, then the mutation. A rejected call
//! leaves the state byte-identical, including `next_submission_id`.

use tracing::{debug, info};

use cleanproof_common::errors::LedgerError;
use cleanproof_common::leveling::{level, Level};
use cleanproof_common::types::{Address, EvidenceRef, GeoPoint, Timestamp};

use crate::submission::{RecyclablesAttachment, Submission};

use super::LedgerState;

impl LedgerState {
    /// Creates a Pending submission and returns its id.
    ///
    /// # Errors
    ///
    /// - `InvalidEvidence` when `before_evidence`, `after_evidence` or a
    ///   supplied `impact_report` is empty.
    /// - `FeeRequired` when the submission fee is enabled and `fee_paid`
    ///   falls short.
    #[allow(clippy::too_many_arguments)]
    pub fn create_submission(
        &mut self,
        submitter: Address,
        before_evidence: EvidenceRef,
        after_evidence: EvidenceRef,
        location: GeoPoint,
        impact_report: Option<EvidenceRef>,
        referrer: Option<Address>,
        fee_paid: u128,
        now: Timestamp,
    ) -> Result<u64, LedgerError> {
        if before_evidence.is_empty() {
            return Err(LedgerError::InvalidEvidence {
                field: "before_evidence".to_string(),
            });
        }
        if after_evidence.is_empty() {
            return Err(LedgerError::InvalidEvidence {
                field: "after_evidence".to_string(),
            });
        }
        if let Some(report) = &impact_report {
            if report.is_empty() {
                return Err(LedgerError::InvalidEvidence {
                    field: "impact_report".to_string(),
                });
            }
        }
        self.check_fee(self.submission_fee, fee_paid)?;

        // Mutation boundary. Nothing below can fail.
        self.collect_fee(self.submission_fee);

        let id = self.next_submission_id;
        self.next_submission_id += 1;

        let submission = Submission::new(
            id,
            submitter,
            before_evidence,
            after_evidence,
            location,
            impact_report,
            referrer,
            now,
        );
        self.submissions.insert(id, submission);

        info!(id, submitter = %submitter, "submission created");
        Ok(id)
    }

    /// Attaches the recyclables evidence pair to a Pending submission.
    ///
    /// Single-assignment: once set, a second attach fails. Only the
    /// submitter may attach.
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown id.
    /// - `Unauthorized` when `actor` is not the submitter.
    /// - `InvalidState` when the submission is finalized or already has
    ///   recyclables attached.
    /// - `InvalidEvidence` when either reference is empty.
    pub fn attach_recyclables(
        &mut self,
        actor: Address,
        id: u64,
        photo: EvidenceRef,
        receipt: EvidenceRef,
    ) -> Result<(), LedgerError> {
        if photo.is_empty() {
            return Err(LedgerError::InvalidEvidence {
                field: "recyclables_photo".to_string(),
            });
        }
        if receipt.is_empty() {
            return Err(LedgerError::InvalidEvidence {
                field: "recyclables_receipt".to_string(),
            });
        }

        let submission = self
            .submissions
            .get_mut(&id)
            .ok_or(LedgerError::NotFound { id })?;

        if submission.submitter != actor {
            return Err(LedgerError::Unauthorized { account: actor });
        }
        if !submission.status.is_pending() || submission.has_recyclables() {
            return Err(LedgerError::InvalidState { id });
        }

        submission.recyclables = Some(RecyclablesAttachment { photo, receipt });
        debug!(id, "recyclables attached");
        Ok(())
    }

    /// Read access to a submission.
    #[must_use]
    pub fn submission(&self, id: u64) -> Option<&Submission> {
        self.submissions.get(&id)
    }

    /// Number of submissions ever created.
    #[must_use]
    pub fn submission_count(&self) -> u64 {
        self.next_submission_id
    }

    /// Number of approved submissions owned by `account`.
    #[must_use]
    pub fn approved_count(&self, account: &Address) -> u64 {
        self.submissions
            .values()
            .filter(|s| s.submitter == *account && s.status.is_approved())
            .count() as u64
    }

    /// Collectible level derived from the approved count. `None` until the
    /// first approval.
    #[must_use]
    pub fn level_of(&self, account: &Address) -> Option<Level> {
        level(self.approved_count(account))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
