//! # Economic Constants
//!
//! Single source of truth for reward amounts and the recyclables reserve.
//! The ledger crate must reference these constants, never redefine them.
//! Amounts are in the token's smallest units.

// ════════════════════════════════════════════════════════════════════════════════
// APPROVAL REWARDS
// ════════════════════════════════════════════════════════════════════════════════

/// Base reward credited to the submitter for every approved submission.
pub const BASE_IMPACT_REWARD: u128 = 10;

/// Additional bonus when the submission carries an impact report.
pub const IMPACT_REPORT_BONUS: u128 = 5;

/// Reward credited to the referrer (not the submitter) on approval.
pub const REFERRAL_REWARD: u128 = 2;

/// Incentive credited to the verifier who finalizes an approval.
pub const VERIFIER_INCENTIVE_REWARD: u128 = 1;

// ════════════════════════════════════════════════════════════════════════════════
// RECYCLABLES RESERVE
// ════════════════════════════════════════════════════════════════════════════════

/// Fixed payout per eligible recyclables submission.
pub const RECYCLABLES_UNIT_REWARD: u128 = 5;

/// Initial ceiling of the recyclables reserve, set at genesis. The reserve
/// can only grow afterwards, via a privileged sync from the external
/// funding source.
pub const INITIAL_RESERVE_CAPACITY: u128 = 5_000;

// ════════════════════════════════════════════════════════════════════════════════
// FUNCTIONS
// ════════════════════════════════════════════════════════════════════════════════

/// Remaining reserve headroom: `capacity - distributed`, saturating.
#[must_use]
#[inline]
pub const fn reserve_remaining(capacity: u128, distributed: u128) -> u128 {
    capacity.saturating_sub(distributed)
}

/// Whether the reserve can still fund one unit payout.
#[must_use]
#[inline]
pub const fn reserve_can_pay(capacity: u128, distributed: u128) -> bool {
    reserve_remaining(capacity, distributed) >= RECYCLABLES_UNIT_REWARD
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
