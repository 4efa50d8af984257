//! # Cleanproof Ledger Crate
//!
//! Stateful core of the cleanup submission ledger: the submission
//! lifecycle, role-gated verdicts, category-tagged reward accrual, the
//! capped recyclables reserve and the aggregated claim.
//!
//! ## Architecture
//!
//! ```text
//! SharedLedger (Arc<RwLock>)          crate::shared
//!       │
//!       ▼
//! LedgerState                          crate::state
//!   ├── submissions   (append-only)    crate::submission
//!   ├── roles                          crate::roles
//!   ├── accrued / balances
//!   └── reserve                        crate::reserve
//!       ▲
//! approve / reject pipeline            crate::approval
//! ```
//!
//! Value types, economic constants and the error contract live in
//! `cleanproof_common`.

pub mod approval;
pub mod events;
pub mod reserve;
pub mod roles;
pub mod shared;
pub mod state;
pub mod submission;

pub use approval::{approve, reject};
pub use events::{ApprovalOutcome, ClaimOutcome, ReserveStatus, VerdictEvent};
pub use reserve::ReserveAccount;
pub use roles::{Role, RoleRegistry};
pub use shared::SharedLedger;
pub use state::LedgerState;
pub use submission::{
    RecyclablesAttachment, StatusTransition, StatusTransitionError, Submission, SubmissionStatus,
};
