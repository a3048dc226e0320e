//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ability, DamageType, Dice};

// Rules tables
pub use crate::rules::{ClassDefinition, RaceDefinition, Rulebook, SpellDefinition};

// Character sheet
pub use crate::sheet::{AbilityScores, CharacterDraft, CharacterSheet, ClassLevelEntry};

// Combat
pub use crate::combat::{CombatLog, ResourceConfig, ResourcePool, ResultEvent, SlotSource};

// Session
pub use crate::session::{Command, SessionState};

// Persistence
pub use crate::store::{Journal, LoadOutcome};
