//! # Leveling Rule
//!
//! Pure mapping from an account's approved-submission count to the
//! collectible tier used by the external mint service.
//!
//! ## Mapping
//!
//! ```text
//! count 0      → None (unleveled, no collectible yet)
//! count 1–3    → Newbie,   tier = count
//! count 4–6    → Pro,      tier = count
//! count 7–9    → Hero,     tier = count
//! count 10+    → Guardian, tier = 10 (clamped)
//! ```
//!
//! The tier is clamped to [1, 10] for display regardless of how high the
//! count grows; the name stays Guardian past 10.
//!
//! This function is recomputed on demand from the submission log. It must
//! never be cached in mutable state that could desynchronize from the log.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest displayable tier.
pub const MAX_TIER: u8 = 10;

// ════════════════════════════════════════════════════════════════════════════════
// TYPES
// ════════════════════════════════════════════════════════════════════════════════

/// Named rank band of a collectible level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelName {
    Newbie,
    Pro,
    Hero,
    Guardian,
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LevelName::Newbie => "Newbie",
            LevelName::Pro => "Pro",
            LevelName::Hero => "Hero",
            LevelName::Guardian => "Guardian",
        };
        f.write_str(s)
    }
}

/// Derived collectible level: tier in [1, 10] plus its rank name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Level {
    pub tier: u8,
    pub name: LevelName,
}

// ════════════════════════════════════════════════════════════════════════════════
// RULE
// ════════════════════════════════════════════════════════════════════════════════

/// Maps an approved-submission count to a collectible level.
///
/// Returns `None` for a count of zero: an account with no approved
/// submissions is unleveled and holds no collectible. This is a deliberate
/// choice: the documented ranges start at 1, and defaulting to tier 1
/// would hand out a collectible for doing nothing.
///
/// Pure, deterministic, no side effects.
#[must_use]
pub const fn level(approved_count: u64) -> Option<Level> {
    let name = match approved_count {
        0 => return None,
        1..=3 => LevelName::Newbie,
        4..=6 => LevelName::Pro,
        7..=9 => LevelName::Hero,
        _ => LevelName::Guardian,
    };
    let tier = if approved_count >= MAX_TIER as u64 {
        MAX_TIER
    } else {
        approved_count as u8
    };
    Some(Level { tier, name })
}

// ════════════════════════════════════════════════════════════════════════════════
// UNIT TESTS
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ── ZERO COUNT ──────────────────────────────────────────────────────

    #[test]
    fn level_zero_is_unleveled() {
        assert_eq!(level(0), None);
    }

    // ── BAND BOUNDARIES ─────────────────────────────────────────────────

    #[test]
    fn level_one_is_newbie_tier_one() {
        assert_eq!(
            level(1),
            Some(Level {
                tier: 1,
                name: LevelName::Newbie
            })
        );
    }

    #[test]
    fn level_three_is_newbie_tier_three() {
        assert_eq!(
            level(3),
            Some(Level {
                tier: 3,
                name: LevelName::Newbie
            })
        );
    }

    #[test]
    fn level_four_is_pro_tier_four() {
        assert_eq!(
            level(4),
            Some(Level {
                tier: 4,
                name: LevelName::Pro
            })
        );
    }

    #[test]
    fn level_six_is_pro_tier_six() {
        assert_eq!(
            level(6),
            Some(Level {
                tier: 6,
                name: LevelName::Pro
            })
        );
    }

    #[test]
    fn level_seven_is_hero_tier_seven() {
        assert_eq!(
            level(7),
            Some(Level {
                tier: 7,
                name: LevelName::Hero
            })
        );
    }

    #[test]
    fn level_nine_is_hero_tier_nine() {
        assert_eq!(
            level(9),
            Some(Level {
                tier: 9,
                name: LevelName::Hero
            })
        );
    }

    #[test]
    fn level_ten_is_guardian_tier_ten() {
        assert_eq!(
            level(10),
            Some(Level {
                tier: 10,
                name: LevelName::Guardian
            })
        );
    }

    // ── CLAMPING ────────────────────────────────────────────────────────

    #[test]
    fn level_twenty_five_clamps_to_guardian_ten() {
        assert_eq!(
            level(25),
            Some(Level {
                tier: 10,
                name: LevelName::Guardian
            })
        );
    }

    #[test]
    fn level_u64_max_clamps_to_guardian_ten() {
        assert_eq!(
            level(u64::MAX),
            Some(Level {
                tier: 10,
                name: LevelName::Guardian
            })
        );
    }

    #[test]
    fn tier_never_exceeds_max() {
        for count in 0..=100u64 {
            if let Some(l) = level(count) {
                assert!(l.tier >= 1 && l.tier <= MAX_TIER, "count={}", count);
            }
        }
    }

    #[test]
    fn tier_equals_count_up_to_ten() {
        for count in 1..=10u64 {
            let l = level(count).expect("leveled");
            assert_eq!(l.tier as u64, count);
        }
    }

    // ── DETERMINISM ─────────────────────────────────────────────────────

    #[test]
    fn rule_is_deterministic() {
        for count in [0u64, 1, 5, 9, 10, 11, 1_000] {
            assert_eq!(level(count), level(count));
        }
    }

    // ── DISPLAY & SERDE ─────────────────────────────────────────────────

    #[test]
    fn level_name_display() {
        assert_eq!(format!("{}", LevelName::Newbie), "Newbie");
        assert_eq!(format!("{}", LevelName::Pro), "Pro");
        assert_eq!(format!("{}", LevelName::Hero), "Hero");
        assert_eq!(format!("{}", LevelName::Guardian), "Guardian");
    }

    #[test]
    fn level_serde_roundtrip() {
        let l = level(8).expect("leveled");
        let json = serde_json::to_string(&l).expect("serialize");
        let back: Level = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(l, back);
    }
}
