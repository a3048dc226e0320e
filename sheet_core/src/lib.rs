//! sheet_core - Rules engine for the terminal tabletop companion
//!
//! This library provides:
//! - Rulebook: immutable race/class/spell tables
//! - CharacterDraft / CharacterSheet: the creation wizard's state and
//!   its frozen result with derived stats
//! - ResourcePool + resolver: slot consumption, dice, crits, events
//! - SessionState: a running combat session with a bounded log
//! - store: JSON persistence for the character and the journal

pub mod combat;
pub mod rules;
pub mod session;
pub mod sheet;
pub mod store;
pub mod types;

pub mod prelude;

// Re-export core types for convenience
pub use combat::{
    crit_threshold, CombatLog, ResourceConfig, ResourcePool, ResultEvent, SlotSource,
    LOG_CAPACITY,
};
pub use rules::{ClassDefinition, RaceDefinition, Rulebook, RulesError, SpellDefinition};
pub use session::{Command, SessionState};
pub use sheet::{
    ability_modifier, proficiency_bonus, AbilityScores, BuildError, CharacterDraft,
    CharacterSheet, ClassLevelEntry,
};
pub use store::{Journal, LoadOutcome, StoreError};
pub use types::{Ability, DamageType, Dice};
