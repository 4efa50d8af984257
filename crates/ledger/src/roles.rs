//! # Roles & Role Registry
//!
//! Closed enum of privileged roles and the `(role, account)` grant map.
//! Authorization is an explicit guard invoked at the top of every
//! privileged operation; no dynamic role strings, no ambient context.
//!
//! | Role | Grants |
//! |------|--------|
//! | `DefaultAdmin` | grant/revoke any role, treasury and fee changes, reserve sync |
//! | `Admin` | approve/reject submissions, bonus credits |
//! | `Verifier` | approve/reject submissions |
//!
//! Distinct roles may overlap on one account. `DefaultAdmin` is the
//! controlling role for every grant, including `DefaultAdmin` itself.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use cleanproof_common::types::Address;

// ════════════════════════════════════════════════════════════════════════════════
// ROLE
// ════════════════════════════════════════════════════════════════════════════════

/// Privileged roles of the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Can grant/revoke roles, change treasury and fees, sync the reserve.
    DefaultAdmin,
    /// Can approve/reject submissions and credit admin bonuses.
    Admin,
    /// Can approve/reject submissions.
    Verifier,
}

impl Role {
    /// All roles.
    pub const ALL: [Role; 3] = [Role::DefaultAdmin, Role::Admin, Role::Verifier];

    /// Stable snake_case name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Role::DefaultAdmin => "default_admin",
            Role::Admin => "admin",
            Role::Verifier => "verifier",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// ROLE REGISTRY
// ════════════════════════════════════════════════════════════════════════════════

/// Grant map keyed by `(role, account)`.
///
/// ## Invariants
///
/// - A pair is either granted or not; repeated grants are idempotent.
/// - `has_role` is a pure read and never fails.
/// - The registry enforces no authorization itself; the ledger's guards do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistry {
    granted: HashSet<(Role, Address)>,
}

impl RoleRegistry {
    /// Empty registry. Genesis seeding happens in `LedgerState::new`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `role` to `account`. Returns `true` if the grant is new.
    pub fn grant(&mut self, role: Role, account: Address) -> bool {
        self.granted.insert((role, account))
    }

    /// Revokes `role` from `account`. Returns `true` if a grant was removed.
    pub fn revoke(&mut self, role: Role, account: Address) -> bool {
        self.granted.remove(&(role, account))
    }

    /// Whether `account` holds `role`. Pure read, never fails.
    #[must_use]
    #[inline]
    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.granted.contains(&(role, *account))
    }

    /// Whether `account` may approve/reject submissions: Admin and Verifier
    /// are equivalent for this purpose.
    #[must_use]
    #[inline]
    pub fn can_verify(&self, account: &Address) -> bool {
        self.has_role(Role::Admin, account) || self.has_role(Role::Verifier, account)
    }

    /// Number of active grants.
    #[must_use]
    pub fn grant_count(&self) -> usize {
        self.granted.len()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    // ── ROLE NAMES ──────────────────────────────────────────────────────

    #[test]
    fn test_role_names() {
        assert_eq!(Role::DefaultAdmin.name(), "default_admin");
        assert_eq!(Role::Admin.name(), "admin");
        assert_eq!(Role::Verifier.name(), "verifier");
    }

    #[test]
    fn test_role_display_matches_name() {
        for role in Role::ALL {
            assert_eq!(format!("{}", role), role.name());
        }
    }

    // ── GRANT / REVOKE ──────────────────────────────────────────────────

    #[test]
    fn test_new_registry_has_no_grants() {
        let reg = RoleRegistry::new();
        assert_eq!(reg.grant_count(), 0);
        for role in Role::ALL {
            assert!(!reg.has_role(role, &addr(0x01)));
        }
    }

    #[test]
    fn test_grant_then_has_role() {
        let mut reg = RoleRegistry::new();
        assert!(reg.grant(Role::Verifier, addr(0x01)));
        assert!(reg.has_role(Role::Verifier, &addr(0x01)));
        assert!(!reg.has_role(Role::Admin, &addr(0x01)));
    }

    #[test]
    fn test_grant_is_idempotent() {
        let mut reg = RoleRegistry::new();
        assert!(reg.grant(Role::Admin, addr(0x01)));
        assert!(!reg.grant(Role::Admin, addr(0x01)));
        assert_eq!(reg.grant_count(), 1);
    }

    #[test]
    fn test_revoke_removes_grant() {
        let mut reg = RoleRegistry::new();
        reg.grant(Role::Verifier, addr(0x01));
        assert!(reg.revoke(Role::Verifier, addr(0x01)));
        assert!(!reg.has_role(Role::Verifier, &addr(0x01)));
    }

    #[test]
    fn test_revoke_missing_grant_is_noop() {
        let mut reg = RoleRegistry::new();
        assert!(!reg.revoke(Role::Verifier, addr(0x01)));
    }

    #[test]
    fn test_roles_overlap_on_one_account() {
        let mut reg = RoleRegistry::new();
        reg.grant(Role::DefaultAdmin, addr(0x01));
        reg.grant(Role::Admin, addr(0x01));
        reg.grant(Role::Verifier, addr(0x01));
        assert_eq!(reg.grant_count(), 3);
        for role in Role::ALL {
            assert!(reg.has_role(role, &addr(0x01)));
        }
    }

    #[test]
    fn test_grants_are_per_account() {
        let mut reg = RoleRegistry::new();
        reg.grant(Role::Verifier, addr(0x01));
        assert!(!reg.has_role(Role::Verifier, &addr(0x02)));
    }

    // ── CAN_VERIFY ──────────────────────────────────────────────────────

    #[test]
    fn test_can_verify_with_admin() {
        let mut reg = RoleRegistry::new();
        reg.grant(Role::Admin, addr(0x01));
        assert!(reg.can_verify(&addr(0x01)));
    }

    #[test]
    fn test_can_verify_with_verifier() {
        let mut reg = RoleRegistry::new();
        reg.grant(Role::Verifier, addr(0x01));
        assert!(reg.can_verify(&addr(0x01)));
    }

    #[test]
    fn test_default_admin_alone_cannot_verify() {
        let mut reg = RoleRegistry::new();
        reg.grant(Role::DefaultAdmin, addr(0x01));
        assert!(!reg.can_verify(&addr(0x01)));
    }

    #[test]
    fn test_unknown_account_cannot_verify() {
        let reg = RoleRegistry::new();
        assert!(!reg.can_verify(&addr(0x09)));
    }

    // ── SERDE ───────────────────────────────────────────────────────────

    #[test]
    fn test_registry_serde_roundtrip() {
        let mut reg = RoleRegistry::new();
        reg.grant(Role::DefaultAdmin, addr(0x01));
        reg.grant(Role::Verifier, addr(0x02));

        let json = serde_json::to_string(&reg).expect("serialize");
        let back: RoleRegistry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(reg, back);
    }
}
