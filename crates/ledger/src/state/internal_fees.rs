//! Fee configuration, treasury routing and fee collection.
//!
//! Fee checks and fee collection are split on purpose: every operation
//! validates the gate (`check_fee`) before any mutation, and collects the
//! fee (`collect_fee`) only once it has passed the point of no return.
//! A failed operation never takes the fee.

use tracing::info;

use cleanproof_common::config::FeeConfig;
use cleanproof_common::errors::LedgerError;
use cleanproof_common::types::Address;

use super::LedgerState;

impl LedgerState {
    /// Active submission fee.
    #[must_use]
    #[inline]
    pub fn submission_fee(&self) -> FeeConfig {
        self.submission_fee
    }

    /// Active claim fee.
    #[must_use]
    #[inline]
    pub fn claim_fee(&self) -> FeeConfig {
        self.claim_fee
    }

    /// Current treasury payee.
    #[must_use]
    #[inline]
    pub fn treasury(&self) -> Address {
        self.treasury
    }

    /// Replaces the submission fee. Only `DefaultAdmin`.
    pub fn set_submission_fee(
        &mut self,
        actor: Address,
        fee: FeeConfig,
    ) -> Result<(), LedgerError> {
        self.require_default_admin(actor)?;
        self.submission_fee = fee;
        info!(amount = fee.amount, enabled = fee.enabled, "submission fee updated");
        Ok(())
    }

    /// Replaces the claim fee. Only `DefaultAdmin`.
    pub fn set_claim_fee(&mut self, actor: Address, fee: FeeConfig) -> Result<(), LedgerError> {
        self.require_default_admin(actor)?;
        self.claim_fee = fee;
        info!(amount = fee.amount, enabled = fee.enabled, "claim fee updated");
        Ok(())
    }

    /// Redirects fee collection to a new treasury account. Only
    /// `DefaultAdmin`. Already-collected balances stay where they are.
    pub fn set_treasury(&mut self, actor: Address, treasury: Address) -> Result<(), LedgerError> {
        self.require_default_admin(actor)?;
        self.treasury = treasury;
        info!(treasury = %treasury, "treasury updated");
        Ok(())
    }

    /// Transferable balance of `account`. Zero for unknown accounts.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Validates `supplied` against `fee`. Read-only.
    pub(crate) fn check_fee(&self, fee: FeeConfig, supplied: u128) -> Result<(), LedgerError> {
        if fee.is_satisfied_by(supplied) {
            Ok(())
        } else {
            Err(LedgerError::FeeRequired {
                required: fee.required(),
                supplied,
            })
        }
    }

    /// Credits the required fee amount to the treasury balance. Call only
    /// after `check_fee` has passed on the same config.
    pub(crate) fn collect_fee(&mut self, fee: FeeConfig) {
        let amount = fee.required();
        if amount == 0 {
            return;
        }
        let balance = self.balances.entry(self.treasury).or_insert(0);
        *balance = balance.saturating_add(amount);
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
