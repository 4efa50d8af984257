//! # Shared Ledger Handle
//!
//! Thread-safe wrapper around `LedgerState` for concurrent callers. All
//! mutating operations take the write lock for their full duration, so the
//! single-writer guarantees of the state carry over unchanged: of two
//! racing verdicts on one submission, exactly one commits.

use std::sync::Arc;

use parking_lot::RwLock;

use cleanproof_common::categories::CategoryBalances;
use cleanproof_common::errors::LedgerError;
use cleanproof_common::leveling::Level;
use cleanproof_common::types::{Address, EvidenceRef, GeoPoint, Timestamp};

use crate::approval;
use crate::events::{ApprovalOutcome, ClaimOutcome, VerdictEvent};
use crate::roles::Role;
use crate::state::LedgerState;
use crate::submission::Submission;

/// Cloneable handle to one ledger. Clones share the same state.
#[derive(Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<LedgerState>>,
}

impl SharedLedger {
    /// Wraps a fresh genesis state.
    #[must_use]
    pub fn new(genesis_admin: Address) -> Self {
        SharedLedger {
            inner: Arc::new(RwLock::new(LedgerState::new(genesis_admin))),
        }
    }

    /// Runs `f` under the read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&LedgerState) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` under the write lock.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut LedgerState) -> R) -> R {
        f(&mut self.inner.write())
    }

    // ── MUTATIONS ───────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn create_submission(
        &self,
        submitter: Address,
        before_evidence: EvidenceRef,
        after_evidence: EvidenceRef,
        location: GeoPoint,
        impact_report: Option<EvidenceRef>,
        referrer: Option<Address>,
        fee_paid: u128,
        now: Timestamp,
    ) -> Result<u64, LedgerError> {
        self.inner.write().create_submission(
            submitter,
            before_evidence,
            after_evidence,
            location,
            impact_report,
            referrer,
            fee_paid,
            now,
        )
    }

    pub fn attach_recyclables(
        &self,
        actor: Address,
        id: u64,
        photo: EvidenceRef,
        receipt: EvidenceRef,
    ) -> Result<(), LedgerError> {
        self.inner.write().attach_recyclables(actor, id, photo, receipt)
    }

    pub fn approve(
        &self,
        actor: Address,
        id: u64,
        now: Timestamp,
    ) -> Result<ApprovalOutcome, LedgerError> {
        approval::approve(&mut self.inner.write(), actor, id, now)
    }

    pub fn reject(
        &self,
        actor: Address,
        id: u64,
        now: Timestamp,
    ) -> Result<VerdictEvent, LedgerError> {
        approval::reject(&mut self.inner.write(), actor, id, now)
    }

    pub fn claim(&self, account: Address, fee_paid: u128) -> Result<ClaimOutcome, LedgerError> {
        self.inner.write().claim(account, fee_paid)
    }

    pub fn grant_role(
        &self,
        actor: Address,
        role: Role,
        account: Address,
    ) -> Result<bool, LedgerError> {
        self.inner.write().grant_role(actor, role, account)
    }

    // ── READS ───────────────────────────────────────────────────────────

    #[must_use]
    pub fn submission(&self, id: u64) -> Option<Submission> {
        self.inner.read().submission(id).cloned()
    }

    #[must_use]
    pub fn accrued_balances(&self, account: &Address) -> CategoryBalances {
        self.inner.read().accrued_balances(account)
    }

    #[must_use]
    pub fn accrued_total(&self, account: &Address) -> u128 {
        self.inner.read().accrued_total(account)
    }

    #[must_use]
    pub fn balance_of(&self, account: &Address) -> u128 {
        self.inner.read().balance_of(account)
    }

    #[must_use]
    pub fn level_of(&self, account: &Address) -> Option<Level> {
        self.inner.read().level_of(account)
    }

    #[must_use]
    pub fn reserve_remaining(&self) -> u128 {
        self.inner.read().reserve_remaining()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
