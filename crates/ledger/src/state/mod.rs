//! # Ledger State
//!
//! `LedgerState` is the single mutable authority for the submission
//! lifecycle, reward accrual and payout bookkeeping. The struct lives here;
//! its operations are split across internal modules by concern:
//!
//! | Module | Concern |
//! |--------|---------|
//! | `internal_submissions` | create, attach recyclables, reads, leveling |
//! | `internal_roles` | grant/revoke, authorization guards |
//! | `internal_rewards` | category accrual, claim, admin bonus |
//! | `internal_reserve` | recyclables payout, capacity sync |
//! | `internal_fees` | fee config, treasury, fee collection |
//!
//! The approval/rejection pipeline itself lives in `crate::approval`; it
//! drives these internals in a fixed order so the status flip is always the
//! first mutation.
//!
//! ## Concurrency
//!
//! `LedgerState` itself is single-writer: every mutating method takes
//! `&mut self` and either completes or leaves the state untouched.
//! Cross-thread sharing goes through `crate::shared::SharedLedger`.

mod internal_fees;
mod internal_reserve;
mod internal_rewards;
mod internal_roles;
mod internal_submissions;

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::info;

use cleanproof_common::categories::CategoryBalances;
use cleanproof_common::config::FeeConfig;
use cleanproof_common::economics::INITIAL_RESERVE_CAPACITY;
use cleanproof_common::types::Address;

use crate::reserve::ReserveAccount;
use crate::roles::{Role, RoleRegistry};
use crate::submission::Submission;

// ════════════════════════════════════════════════════════════════════════════════
// LEDGER STATE
// ════════════════════════════════════════════════════════════════════════════════

/// Authoritative in-memory state of the cleanup submission ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Append-only submission log, keyed by monotonic id.
    pub(crate) submissions: BTreeMap<u64, Submission>,
    /// Next id to assign. Starts at 0, never reused.
    pub(crate) next_submission_id: u64,
    /// Accrued-but-unclaimed rewards per account.
    pub(crate) accrued: HashMap<Address, CategoryBalances>,
    /// Transferable balances, credited by claim and fee collection.
    pub(crate) balances: HashMap<Address, u128>,
    /// Capped recyclables pool.
    pub(crate) reserve: ReserveAccount,
    /// Role grants.
    pub(crate) roles: RoleRegistry,
    /// Account receiving collected fees.
    pub(crate) treasury: Address,
    /// Fee gate for submission creation.
    pub(crate) submission_fee: FeeConfig,
    /// Fee gate for claim.
    pub(crate) claim_fee: FeeConfig,
}

impl LedgerState {
    /// Genesis state.
    ///
    /// The genesis admin holds `DefaultAdmin` and `Admin`, is the initial
    /// treasury payee, both fees start disabled, and the reserve opens at
    /// its initial capacity with nothing distributed.
    #[must_use]
    pub fn new(genesis_admin: Address) -> Self {
        let mut roles = RoleRegistry::new();
        roles.grant(Role::DefaultAdmin, genesis_admin);
        roles.grant(Role::Admin, genesis_admin);

        info!(admin = %genesis_admin, "ledger genesis");

        LedgerState {
            submissions: BTreeMap::new(),
            next_submission_id: 0,
            accrued: HashMap::new(),
            balances: HashMap::new(),
            reserve: ReserveAccount::new(INITIAL_RESERVE_CAPACITY),
            roles,
            treasury: genesis_admin,
            submission_fee: FeeConfig::disabled(),
            claim_fee: FeeConfig::disabled(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
