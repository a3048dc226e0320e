//! Structured result events
//!
//! The resolver emits these instead of rendering text; the front end
//! decides how each variant looks on screen.

use super::resources::SlotSource;
use crate::types::{Ability, DamageType};
use serde::{Deserialize, Serialize};

/// One observable outcome of handling a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultEvent {
    /// A cast went through resource check successfully
    Cast { spell: String, source: SlotSource },
    /// Tier 1+ cast with both pools empty; nothing was consumed
    OutOfSlots { spell: String },
    /// The command named a spell the rulebook does not know
    UnknownSpell { input: String },
    /// Utility spell: descriptive effect, no rolls
    UtilityEffect { spell: String, desc: String },
    /// One to-hit roll (spell beam or weapon attack)
    AttackRoll {
        ability: Ability,
        roll: u32,
        modifier: i32,
        proficiency: i32,
        total: i32,
        crit: bool,
    },
    /// One damage roll
    DamageRoll {
        base: i32,
        bonus: i32,
        total: i32,
        damage_type: Option<DamageType>,
    },
    /// Heal applied to current HP
    Healed { amount: i32, hp: i32, hp_max: i32 },
    /// Hex flag flipped
    HexToggled { active: bool },
    /// Long rest completed
    Rested,
    /// Free-text line (session banners and the like)
    Info { text: String },
    /// Input mapped to no command; the loop continues
    Unrecognized { input: String },
}
