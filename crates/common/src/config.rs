//! Fee configuration.
//!
//! One `FeeConfig` instance gates submission creation and another gates
//! claim; a disabled fee must never block the corresponding action. The
//! treasury payee is held once at the ledger level, not per fee.

use serde::{Deserialize, Serialize};

/// Fee gate for a single action class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Fee amount in smallest token units. Meaningless while disabled.
    pub amount: u128,
    /// Whether the fee is collected at all.
    pub enabled: bool,
}

impl FeeConfig {
    /// Disabled fee; the action is free.
    #[must_use]
    pub const fn disabled() -> Self {
        FeeConfig {
            amount: 0,
            enabled: false,
        }
    }

    /// Enabled fee of the given amount.
    #[must_use]
    pub const fn enabled(amount: u128) -> Self {
        FeeConfig {
            amount,
            enabled: true,
        }
    }

    /// The amount a caller must supply: the configured amount when enabled,
    /// zero otherwise.
    #[must_use]
    #[inline]
    pub const fn required(&self) -> u128 {
        if self.enabled {
            self.amount
        } else {
            0
        }
    }

    /// Whether `supplied` satisfies this fee gate.
    #[must_use]
    #[inline]
    pub const fn is_satisfied_by(&self, supplied: u128) -> bool {
        supplied >= self.required()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
