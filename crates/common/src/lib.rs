//! # Cleanproof Common Crate
//!
//! Shared value types and pure rules for the cleanup submission ledger.
//!
//! ## Modules
//! - `types`: Address, EvidenceRef, GeoPoint newtypes
//! - `errors`: `LedgerError`, the public error contract of the core
//! - `categories`: reward categories and the fixed per-account balance map
//! - `economics`: reward amounts and reserve constants (single source of truth)
//! - `leveling`: pure approved-count → collectible tier rule
//! - `config`: fee configuration
//!
//! This crate holds no mutable ledger state. Everything here is either a
//! value type or a pure function, consumable by the ledger core and by
//! client tooling without pulling in the stateful layer.

pub mod categories;
pub mod config;
pub mod economics;
pub mod errors;
pub mod leveling;
pub mod types;

pub use categories::{CategoryBalances, RewardCategory};
pub use config::FeeConfig;
pub use errors::LedgerError;
pub use leveling::{level, Level, LevelName};
pub use types::{Address, EvidenceRef, GeoPoint, Timestamp};
