//! # Reward Categories & Per-Account Balance Map
//!
//! Accrued-but-unclaimed rewards are tracked per account in a fixed set of
//! named categories. The set is a closed enum and the balance map is a
//! fixed-field struct, NOT a dynamically keyed collection, so the
//! aggregated claim is a single bounded zero-and-sum with no iteration-order
//! or partial-claim ambiguity.
//!
//! ## Invariants
//!
//! - Categories are additive counters: credited by the accrual engine,
//!   never decremented except by `drain`, which zeroes every category
//!   atomically and returns their sum.
//! - `sum of all-time credits − sum of all-time drains ≥ 0` per account.
//! - Saturating arithmetic everywhere; crediting cannot fail.

use std::fmt;

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// REWARD CATEGORY
// ════════════════════════════════════════════════════════════════════════════════

/// Named bucket of accrued-but-unclaimed reward amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardCategory {
    /// Fixed base reward for every approved submission.
    BaseImpact,
    /// Bonus for sustained submission streaks, credited by admin tooling.
    Streak,
    /// Referral reward, credited to the referrer of an approved submission.
    Referral,
    /// Bonus for submissions carrying an impact report.
    ImpactReport,
    /// Incentive paid to the verifier who finalizes a submission.
    VerifierIncentive,
    /// Capped-reserve payout for recyclables evidence.
    Recyclables,
}

impl RewardCategory {
    /// All categories, in drain order.
    pub const ALL: [RewardCategory; 6] = [
        RewardCategory::BaseImpact,
        RewardCategory::Streak,
        RewardCategory::Referral,
        RewardCategory::ImpactReport,
        RewardCategory::VerifierIncentive,
        RewardCategory::Recyclables,
    ];

    /// Stable snake_case name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            RewardCategory::BaseImpact => "base_impact",
            RewardCategory::Streak => "streak",
            RewardCategory::Referral => "referral",
            RewardCategory::ImpactReport => "impact_report",
            RewardCategory::VerifierIncentive => "verifier_incentive",
            RewardCategory::Recyclables => "recyclables",
        }
    }
}

impl fmt::Display for RewardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// CATEGORY BALANCES
// ════════════════════════════════════════════════════════════════════════════════

/// Per-account accrued reward balances, one counter per category.
///
/// ## Why fixed fields instead of a map
///
/// A `HashMap<RewardCategory, u128>` would make `drain` depend on iteration
/// order and would admit partially-populated states. Six named fields keep
/// the claim path a bounded, branch-free zero-and-sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBalances {
    pub base_impact: u128,
    pub streak: u128,
    pub referral: u128,
    pub impact_report: u128,
    pub verifier_incentive: u128,
    pub recyclables: u128,
}

impl CategoryBalances {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the given category. Saturating; cannot fail.
    pub fn credit(&mut self, category: RewardCategory, amount: u128) {
        let slot = self.slot_mut(category);
        *slot = slot.saturating_add(amount);
    }

    /// Current balance of a single category.
    #[must_use]
    #[inline]
    pub fn get(&self, category: RewardCategory) -> u128 {
        match category {
            RewardCategory::BaseImpact => self.base_impact,
            RewardCategory::Streak => self.streak,
            RewardCategory::Referral => self.referral,
            RewardCategory::ImpactReport => self.impact_report,
            RewardCategory::VerifierIncentive => self.verifier_incentive,
            RewardCategory::Recyclables => self.recyclables,
        }
    }

    /// Sum across all categories. Saturating.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.base_impact
            .saturating_add(self.streak)
            .saturating_add(self.referral)
            .saturating_add(self.impact_report)
            .saturating_add(self.verifier_incentive)
            .saturating_add(self.recyclables)
    }

    /// Zeroes every category and returns the pre-drain sum.
    ///
    /// This is the only decrementing operation. It is all-or-nothing:
    /// after it returns, every field is zero and the returned value is
    /// exactly what `total()` reported before the call.
    pub fn drain(&mut self) -> u128 {
        let sum = self.total();
        *self = Self::default();
        sum
    }

    fn slot_mut(&mut self, category: RewardCategory) -> &mut u128 {
        match category {
            RewardCategory::BaseImpact => &mut self.base_impact,
            RewardCategory::Streak => &mut self.streak,
            RewardCategory::Referral => &mut self.referral,
            RewardCategory::ImpactReport => &mut self.impact_report,
            RewardCategory::VerifierIncentive => &mut self.verifier_incentive,
            RewardCategory::Recyclables => &mut self.recyclables,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
