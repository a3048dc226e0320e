//! Ability score set

use crate::types::Ability;
use serde::{Deserialize, Serialize};

/// The six ability scores of a character
///
/// Serialized with the short keys (`str`, `dex`, ...) the save-file
/// schema uses. Scores are 1..=30 in practice but not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(rename = "str")]
    pub strength: i32,
    #[serde(rename = "dex")]
    pub dexterity: i32,
    #[serde(rename = "con")]
    pub constitution: i32,
    #[serde(rename = "int")]
    pub intelligence: i32,
    #[serde(rename = "wis")]
    pub wisdom: i32,
    #[serde(rename = "cha")]
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::uniform(10)
    }
}

impl AbilityScores {
    /// All six scores set to the same value
    pub fn uniform(score: i32) -> Self {
        AbilityScores {
            strength: score,
            dexterity: score,
            constitution: score,
            intelligence: score,
            wisdom: score,
            charisma: score,
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.strength,
            Ability::Dex => self.dexterity,
            Ability::Con => self.constitution,
            Ability::Int => self.intelligence,
            Ability::Wis => self.wisdom,
            Ability::Cha => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        match ability {
            Ability::Str => self.strength = score,
            Ability::Dex => self.dexterity = score,
            Ability::Con => self.constitution = score,
            Ability::Int => self.intelligence = score,
            Ability::Wis => self.wisdom = score,
            Ability::Cha => self.charisma = score,
        }
    }

    /// Iterate scores in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::all().iter().map(move |a| (*a, self.get(*a)))
    }
}
