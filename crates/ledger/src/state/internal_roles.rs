//! Role administration and the authorization guards used by every
//! privileged operation.
//!
//! `DefaultAdmin` is the controlling role for all grants, including
//! `DefaultAdmin` itself. The guards return `LedgerError::Unauthorized`
//! carrying the offending account so the failure is attributable in logs.

use tracing::{info, warn};

use cleanproof_common::errors::LedgerError;
use cleanproof_common::types::Address;

use crate::roles::Role;

use super::LedgerState;

impl LedgerState {
    /// Whether `account` holds `role`.
    #[must_use]
    #[inline]
    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.roles.has_role(role, account)
    }

    /// Grants `role` to `account`. Only `DefaultAdmin` may grant.
    ///
    /// Returns `true` when the grant is new, `false` when it already held.
    pub fn grant_role(
        &mut self,
        actor: Address,
        role: Role,
        account: Address,
    ) -> Result<bool, LedgerError> {
        self.require_default_admin(actor)?;
        let newly = self.roles.grant(role, account);
        if newly {
            info!(role = role.name(), account = %account, by = %actor, "role granted");
        }
        Ok(newly)
    }

    /// Revokes `role` from `account`. Only `DefaultAdmin` may revoke.
    ///
    /// Returns `true` when a grant was removed.
    pub fn revoke_role(
        &mut self,
        actor: Address,
        role: Role,
        account: Address,
    ) -> Result<bool, LedgerError> {
        self.require_default_admin(actor)?;
        let removed = self.roles.revoke(role, account);
        if removed {
            info!(role = role.name(), account = %account, by = %actor, "role revoked");
        }
        Ok(removed)
    }

    /// Guard: `actor` must hold `DefaultAdmin`.
    pub(crate) fn require_default_admin(&self, actor: Address) -> Result<(), LedgerError> {
        if self.roles.has_role(Role::DefaultAdmin, &actor) {
            Ok(())
        } else {
            warn!(account = %actor, "default admin check failed");
            Err(LedgerError::Unauthorized { account: actor })
        }
    }

    /// Guard: `actor` must hold `Admin`.
    pub(crate) fn require_admin(&self, actor: Address) -> Result<(), LedgerError> {
        if self.roles.has_role(Role::Admin, &actor) {
            Ok(())
        } else {
            warn!(account = %actor, "admin check failed");
            Err(LedgerError::Unauthorized { account: actor })
        }
    }

    /// Guard: `actor` must hold `Admin` or `Verifier`.
    pub(crate) fn require_verifier(&self, actor: Address) -> Result<(), LedgerError> {
        if self.roles.can_verify(&actor) {
            Ok(())
        } else {
            warn!(account = %actor, "verifier check failed");
            Err(LedgerError::Unauthorized { account: actor })
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════
