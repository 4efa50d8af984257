//! Reward accrual and the aggregated claim.
//!
//! Accrual is infallible once an approval has committed: every credit is a
//! saturating add into the per-account category map. The claim is the only
//! path that moves accrued value into the transferable balance, and it
//! drains all categories in one step.

use tracing::{debug, info};

use cleanproof_common::categories::{CategoryBalances, RewardCategory};
use cleanproof_common::economics::{
    BASE_IMPACT_REWARD, IMPACT_REPORT_BONUS, REFERRAL_REWARD, VERIFIER_INCENTIVE_REWARD,
};
use cleanproof_common::errors::LedgerError;
use cleanproof_common::types::Address;

use crate::events::ClaimOutcome;

use super::LedgerState;

impl LedgerState {
    /// Accrued category balances of `account`. Zeroed for unknown accounts.
    #[must_use]
    pub fn accrued_balances(&self, account: &Address) -> CategoryBalances {
        self.accrued.get(account).copied().unwrap_or_default()
    }

    /// Sum of all accrued categories for `account`.
    #[must_use]
    pub fn accrued_total(&self, account: &Address) -> u128 {
        self.accrued_balances(account).total()
    }

    /// Adds `amount` to one category of `account`. Saturating, infallible.
    pub(crate) fn credit_category(
        &mut self,
        account: Address,
        category: RewardCategory,
        amount: u128,
    ) {
        if amount == 0 {
            return;
        }
        self.accrued.entry(account).or_default().credit(category, amount);
        debug!(account = %account, category = category.name(), amount, "reward accrued");
    }

    /// Credits every approval-triggered reward except the recyclables
    /// payout, which goes through the reserve gate separately.
    ///
    /// The submission's `rewarded` flag is the idempotence backstop: it
    /// flips first, and a second call for the same id is a no-op. The
    /// status gate upstream already makes that unreachable.
    pub(crate) fn credit_on_approval(&mut self, id: u64, verifier: Address) {
        let Some(submission) = self.submissions.get_mut(&id) else {
            return;
        };
        if submission.rewarded {
            return;
        }
        submission.rewarded = true;

        let submitter = submission.submitter;
        let has_report = submission.impact_report.is_some();
        let referrer = submission.referrer;

        self.credit_category(submitter, RewardCategory::BaseImpact, BASE_IMPACT_REWARD);
        if has_report {
            self.credit_category(submitter, RewardCategory::ImpactReport, IMPACT_REPORT_BONUS);
        }
        if let Some(referrer) = referrer {
            self.credit_category(referrer, RewardCategory::Referral, REFERRAL_REWARD);
        }
        self.credit_category(
            verifier,
            RewardCategory::VerifierIncentive,
            VERIFIER_INCENTIVE_REWARD,
        );
    }

    /// Privileged bonus credit, used by streak tooling. `Admin` only.
    pub fn credit_bonus(
        &mut self,
        actor: Address,
        account: Address,
        category: RewardCategory,
        amount: u128,
    ) -> Result<(), LedgerError> {
        self.require_admin(actor)?;
        self.credit_category(account, category, amount);
        info!(account = %account, category = category.name(), amount, by = %actor, "bonus credited");
        Ok(())
    }

    /// Aggregated claim: drains every accrued category of `account` into
    /// its transferable balance.
    ///
    /// Order matters: the fee gate is validated first, then the total is
    /// read. A zero total returns `NothingToClaim` without collecting the
    /// fee or touching any state. Otherwise the fee is collected, the
    /// categories are drained and the balance is credited in one step.
    ///
    /// # Errors
    ///
    /// `FeeRequired` when the claim fee is enabled and `fee_paid` falls
    /// short, even if there is nothing to claim.
    pub fn claim(&mut self, account: Address, fee_paid: u128) -> Result<ClaimOutcome, LedgerError> {
        self.check_fee(self.claim_fee, fee_paid)?;

        let total = self.accrued_total(&account);
        if total == 0 {
            debug!(account = %account, "claim with empty balances");
            return Ok(ClaimOutcome::NothingToClaim);
        }

        // Mutation boundary. Nothing below can fail.
        self.collect_fee(self.claim_fee);

        let amount = match self.accrued.get_mut(&account) {
            Some(balances) => balances.drain(),
            None => 0,
        };
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);

        info!(account = %account, amount, "rewards claimed");
        Ok(ClaimOutcome::Claimed { amount })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use cleanproof_common::config::FeeConfig;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    fn state() -> LedgerState {
        LedgerState::new(addr(0x01))
    }

    // ── CREDIT ──────────────────────────────────────────────────────────

    #[test]
    fn test_credit_category_accumulates() {
        let mut s = state();
        s.credit_category(addr(0x10), RewardCategory::BaseImpact, 10);
        s.credit_category(addr(0x10), RewardCategory::BaseImpact, 10);
        assert_eq!(
            s.accrued_balances(&addr(0x10)).get(RewardCategory::BaseImpact),
            20
        );
        assert_eq!(s.accrued_total(&addr(0x10)), 20);
    }

    #[test]
    fn test_credit_zero_leaves_no_entry() {
        let mut s = state();
        s.credit_category(addr(0x10), RewardCategory::Streak, 0);
        assert_eq!(s.accrued_total(&addr(0x10)), 0);
    }

    // ── BONUS ───────────────────────────────────────────────────────────

    #[test]
    fn test_bonus_requires_admin() {
        let mut s = state();
        let result = s.credit_bonus(addr(0x09), addr(0x10), RewardCategory::Streak, 50);
        assert_eq!(result, Err(LedgerError::Unauthorized { account: addr(0x09) }));
        assert_eq!(s.accrued_total(&addr(0x10)), 0);
    }

    #[test]
    fn test_admin_credits_streak_bonus() {
        let mut s = state();
        s.credit_bonus(addr(0x01), addr(0x10), RewardCategory::Streak, 50)
            .expect("admin");
        assert_eq!(s.accrued_balances(&addr(0x10)).get(RewardCategory::Streak), 50);
    }

    #[test]
    fn test_verifier_cannot_credit_bonus() {
        let mut s = state();
        s.grant_role(addr(0x01), crate::roles::Role::Verifier, addr(0x02))
            .expect("grant");
        assert!(s
            .credit_bonus(addr(0x02), addr(0x10), RewardCategory::Streak, 50)
            .is_err());
    }

    // ── CLAIM ───────────────────────────────────────────────────────────

    #[test]
    fn test_claim_drains_all_categories() {
        let mut s = state();
        s.credit_category(addr(0x10), RewardCategory::BaseImpact, 10);
        s.credit_category(addr(0x10), RewardCategory::ImpactReport, 5);
        s.credit_category(addr(0x10), RewardCategory::Recyclables, 5);

        let outcome = s.claim(addr(0x10), 0).expect("claim");
        assert_eq!(outcome, ClaimOutcome::Claimed { amount: 20 });
        assert_eq!(s.accrued_total(&addr(0x10)), 0);
        assert_eq!(s.balance_of(&addr(0x10)), 20);
    }

    #[test]
    fn test_second_claim_has_nothing() {
        let mut s = state();
        s.credit_category(addr(0x10), RewardCategory::BaseImpact, 10);
        s.claim(addr(0x10), 0).expect("first");
        let outcome = s.claim(addr(0x10), 0).expect("second");
        assert_eq!(outcome, ClaimOutcome::NothingToClaim);
        assert_eq!(s.balance_of(&addr(0x10)), 10);
    }

    #[test]
    fn test_claim_fee_checked_before_anything() {
        let mut s = state();
        s.set_claim_fee(addr(0x01), FeeConfig::enabled(5)).expect("set fee");
        s.credit_category(addr(0x10), RewardCategory::BaseImpact, 10);

        let result = s.claim(addr(0x10), 4);
        assert_eq!(
            result,
            Err(LedgerError::FeeRequired {
                required: 5,
                supplied: 4
            })
        );
        assert_eq!(s.accrued_total(&addr(0x10)), 10);
        assert_eq!(s.balance_of(&addr(0x10)), 0);
    }

    #[test]
    fn test_empty_claim_does_not_collect_fee() {
        let mut s = state();
        s.set_claim_fee(addr(0x01), FeeConfig::enabled(5)).expect("set fee");

        let outcome = s.claim(addr(0x10), 5).expect("fee satisfied");
        assert_eq!(outcome, ClaimOutcome::NothingToClaim);
        assert_eq!(s.balance_of(&addr(0x01)), 0);
    }

    #[test]
    fn test_claim_collects_fee_to_treasury() {
        let mut s = state();
        s.set_claim_fee(addr(0x01), FeeConfig::enabled(5)).expect("set fee");
        s.credit_category(addr(0x10), RewardCategory::BaseImpact, 10);

        let outcome = s.claim(addr(0x10), 5).expect("claim");
        assert_eq!(outcome, ClaimOutcome::Claimed { amount: 10 });
        assert_eq!(s.balance_of(&addr(0x01)), 5);
        assert_eq!(s.balance_of(&addr(0x10)), 10);
    }

    #[test]
    fn test_accrual_after_claim_starts_fresh() {
        let mut s = state();
        s.credit_category(addr(0x10), RewardCategory::BaseImpact, 10);
        s.claim(addr(0x10), 0).expect("claim");
        s.credit_category(addr(0x10), RewardCategory::Referral, 2);
        assert_eq!(s.accrued_total(&addr(0x10)), 2);
        assert_eq!(s.claim(addr(0x10), 0), Ok(ClaimOutcome::Claimed { amount: 2 }));
        assert_eq!(s.balance_of(&addr(0x10)), 12);
    }
}
