//! Character sheet: build inputs, derived stats, and the draft builder

mod draft;
pub mod derive;
mod scores;

pub use derive::{ability_modifier, proficiency_bonus, DerivedStats};
pub use draft::{BuildError, CharacterDraft};
pub use scores::AbilityScores;

use crate::types::Ability;
use serde::{Deserialize, Serialize};

/// One block of levels taken in a single class
///
/// Serde names match the save-file schema (`hd`, `primary_stat`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevelEntry {
    pub name: String,
    pub level: u32,
    #[serde(rename = "hd")]
    pub hit_die: u32,
    #[serde(rename = "primary_stat")]
    pub primary: Ability,
    /// Marks the character's first-ever class; governs the max-die
    /// hit-point rule
    pub is_first: bool,
}

/// A finalized character: build inputs plus frozen derived stats
///
/// Produced by [`CharacterDraft::finalize`], persisted verbatim, and
/// treated as read-only for the rest of its life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    /// Race display name, as the save-file schema stores it
    pub race: String,
    pub base_stats: AbilityScores,
    pub final_stats: AbilityScores,
    pub classes: Vec<ClassLevelEntry>,
    pub total_level: u32,
    pub hp_max: i32,
    pub proficiency: i32,
}

impl CharacterSheet {
    /// Modifier for one final ability score
    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.final_stats.get(ability))
    }

    /// Ability used for attack rolls: the first class's primary
    pub fn attack_ability(&self) -> Ability {
        self.classes
            .first()
            .map(|c| c.primary)
            .unwrap_or(Ability::Str)
    }

    /// Attack bonus: primary modifier plus proficiency
    pub fn attack_bonus(&self) -> i32 {
        self.modifier(self.attack_ability()) + self.proficiency
    }

    /// Spell save DC: 8 + proficiency + primary modifier
    pub fn spell_save_dc(&self) -> i32 {
        8 + self.proficiency + self.modifier(self.attack_ability())
    }

    /// "Sorcerer 1 / Warlock 1" style class summary
    pub fn class_line(&self) -> String {
        self.classes
            .iter()
            .map(|c| format!("{} {}", c.name, c.level))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorlock() -> CharacterSheet {
        let mut base = AbilityScores::default();
        base.set(Ability::Cha, 18);
        CharacterSheet {
            name: "Sorlock".to_string(),
            race: "Human".to_string(),
            base_stats: base,
            final_stats: base,
            classes: vec![
                ClassLevelEntry {
                    name: "Sorcerer".to_string(),
                    level: 1,
                    hit_die: 6,
                    primary: Ability::Cha,
                    is_first: true,
                },
                ClassLevelEntry {
                    name: "Warlock".to_string(),
                    level: 1,
                    hit_die: 8,
                    primary: Ability::Cha,
                    is_first: false,
                },
            ],
            total_level: 2,
            hp_max: 11,
            proficiency: 2,
        }
    }

    #[test]
    fn test_attack_bonus_and_save_dc() {
        let sheet = sorlock();
        // cha 18 -> +4, prof 2
        assert_eq!(sheet.attack_bonus(), 6);
        assert_eq!(sheet.spell_save_dc(), 14);
    }

    #[test]
    fn test_class_line() {
        assert_eq!(sorlock().class_line(), "Sorcerer 1 / Warlock 1");
    }

    #[test]
    fn test_schema_field_names() {
        let json = serde_json::to_string(&sorlock()).unwrap();
        assert!(json.contains("\"base_stats\""));
        assert!(json.contains("\"hd\":6"));
        assert!(json.contains("\"primary_stat\":\"cha\""));
        assert!(json.contains("\"is_first\":true"));
    }
}
