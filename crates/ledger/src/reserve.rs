//! # Recyclables Reserve
//!
//! Capped pool from which the fixed recyclables payout is drawn. The draw
//! is a single check-and-increment: the headroom comparison and the
//! `distributed` bump happen under one `&mut` borrow, so two approvals at
//! the cap boundary can never both take the last unit.
//!
//! ## Invariants
//!
//! - `distributed <= capacity` at all times.
//! - `distributed` never decreases.
//! - Capacity never drops below `distributed`, even through sync.
//! - An exhausted reserve is a soft condition: the caller keeps going and
//!   reports it, never unwinds.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// RESERVE ACCOUNT
// ════════════════════════════════════════════════════════════════════════════════

/// The capped recyclables pool.
///
/// Fields are private: the only way to move `distributed` is `try_draw`,
/// and the only way to move `capacity` is `sync_capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveAccount {
    capacity: u128,
    distributed: u128,
}

impl ReserveAccount {
    /// Reserve with the given ceiling and nothing distributed.
    #[must_use]
    pub const fn new(capacity: u128) -> Self {
        ReserveAccount {
            capacity,
            distributed: 0,
        }
    }

    /// Current ceiling.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> u128 {
        self.capacity
    }

    /// Running total paid out.
    #[must_use]
    #[inline]
    pub const fn distributed(&self) -> u128 {
        self.distributed
    }

    /// Headroom left: `capacity - distributed`.
    #[must_use]
    #[inline]
    pub const fn remaining(&self) -> u128 {
        self.capacity.saturating_sub(self.distributed)
    }

    /// Atomic check-and-increment: draws `unit` if the headroom covers it.
    ///
    /// Returns `true` and bumps `distributed` on success; returns `false`
    /// and changes nothing when the reserve cannot fund one more unit.
    /// Never partially applies.
    pub fn try_draw(&mut self, unit: u128) -> bool {
        if self.remaining() >= unit {
            self.distributed = self.distributed.saturating_add(unit);
            true
        } else {
            false
        }
    }

    /// Re-seeds the ceiling from an external funding confirmation.
    ///
    /// The ceiling is clamped so it never drops below what has already been
    /// distributed. Returns the effective capacity after the sync.
    pub fn sync_capacity(&mut self, new_capacity: u128) -> u128 {
        self.capacity = new_capacity.max(self.distributed);
        self.capacity
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
