//! Interactive character draft
//!
//! Mutable during the creation wizard, then consumed by `finalize`
//! which runs the stat deriver and freezes the result.

use super::derive;
use super::scores::AbilityScores;
use super::{CharacterSheet, ClassLevelEntry};
use crate::rules::Rulebook;
use crate::types::Ability;
use thiserror::Error;

/// Finalize-time violation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("at least one class level is required before finalizing")]
    NoClassLevels,
    #[error("unknown race: {0}")]
    UnknownRace(String),
    #[error("unknown class: {0}")]
    UnknownClass(String),
}

/// A character under construction
#[derive(Debug, Clone)]
pub struct CharacterDraft {
    name: String,
    race_id: String,
    base_scores: AbilityScores,
    classes: Vec<ClassLevelEntry>,
    total_level: u32,
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterDraft {
    /// Fresh draft: "Hero", Human, all scores 10, no levels
    pub fn new() -> Self {
        CharacterDraft {
            name: "Hero".to_string(),
            race_id: "human".to_string(),
            base_scores: AbilityScores::default(),
            classes: Vec::new(),
            total_level: 0,
        }
    }

    /// Set the name; blank input keeps the default
    pub fn set_name(&mut self, name: &str) {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            self.name = trimmed.to_string();
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Select a race by id; unknown ids fall back to the first race
    /// in the book, matching the wizard's forgiving input handling
    pub fn set_race(&mut self, book: &Rulebook, race_id: &str) {
        if book.race(race_id).is_some() {
            self.race_id = race_id.to_string();
        } else if let Some(first) = book.races().first() {
            self.race_id = first.id.clone();
        }
    }

    pub fn race_id(&self) -> &str {
        &self.race_id
    }

    pub fn set_base_score(&mut self, ability: Ability, score: i32) {
        self.base_scores.set(ability, score);
    }

    pub fn base_scores(&self) -> &AbilityScores {
        &self.base_scores
    }

    /// Add levels of a class; the first call marks its entry as the
    /// character's first class
    pub fn add_class_levels(
        &mut self,
        book: &Rulebook,
        class_id: &str,
        levels: u32,
    ) -> Result<(), BuildError> {
        if levels == 0 {
            return Ok(());
        }
        let class = book
            .class(class_id)
            .ok_or_else(|| BuildError::UnknownClass(class_id.to_string()))?;
        self.classes.push(ClassLevelEntry {
            name: class.name.clone(),
            level: levels,
            hit_die: class.hit_die,
            primary: class.primary,
            is_first: self.classes.is_empty(),
        });
        self.total_level += levels;
        Ok(())
    }

    pub fn total_level(&self) -> u32 {
        self.total_level
    }

    pub fn classes(&self) -> &[ClassLevelEntry] {
        &self.classes
    }

    /// Whether finalize would currently succeed
    pub fn can_finalize(&self) -> bool {
        self.total_level >= 1
    }

    /// Run the stat deriver and freeze the sheet
    pub fn finalize(self, book: &Rulebook) -> Result<CharacterSheet, BuildError> {
        if self.total_level < 1 {
            return Err(BuildError::NoClassLevels);
        }
        let race = book
            .race(&self.race_id)
            .ok_or_else(|| BuildError::UnknownRace(self.race_id.clone()))?;

        let derived = derive::derive(&self.base_scores, race, &self.classes);

        Ok(CharacterSheet {
            name: self.name,
            race: race.name.clone(),
            base_stats: self.base_scores,
            final_stats: derived.final_scores,
            classes: self.classes,
            total_level: self.total_level,
            hp_max: derived.hp_max,
            proficiency: derived.proficiency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_requires_a_level() {
        let book = Rulebook::srd();
        let draft = CharacterDraft::new();
        assert!(!draft.can_finalize());
        assert_eq!(draft.finalize(&book), Err(BuildError::NoClassLevels));
    }

    #[test]
    fn test_unknown_class_rejected() {
        let book = Rulebook::srd();
        let mut draft = CharacterDraft::new();
        let err = draft.add_class_levels(&book, "artificer", 1).unwrap_err();
        assert_eq!(err, BuildError::UnknownClass("artificer".to_string()));
    }

    #[test]
    fn test_first_entry_flagged_once() {
        let book = Rulebook::srd();
        let mut draft = CharacterDraft::new();
        draft.add_class_levels(&book, "warlock", 1).unwrap();
        draft.add_class_levels(&book, "sorcerer", 2).unwrap();

        assert!(draft.classes()[0].is_first);
        assert!(!draft.classes()[1].is_first);
        assert_eq!(draft.total_level(), 3);
    }

    #[test]
    fn test_blank_name_keeps_default() {
        let mut draft = CharacterDraft::new();
        draft.set_name("   ");
        assert_eq!(draft.name(), "Hero");
        draft.set_name("Quadrotto");
        assert_eq!(draft.name(), "Quadrotto");
    }

    #[test]
    fn test_finalize_derives_and_freezes() {
        let book = Rulebook::srd();
        let mut draft = CharacterDraft::new();
        draft.set_name("Sorlock");
        draft.set_race(&book, "tiefling");
        draft.set_base_score(Ability::Cha, 16);
        draft.add_class_levels(&book, "sorcerer", 1).unwrap();
        draft.add_class_levels(&book, "warlock", 1).unwrap();

        let sheet = draft.finalize(&book).unwrap();
        assert_eq!(sheet.race, "Tiefling");
        // Tiefling: cha +2, int +1
        assert_eq!(sheet.final_stats.charisma, 18);
        assert_eq!(sheet.final_stats.intelligence, 11);
        assert_eq!(sheet.total_level, 2);
        assert_eq!(sheet.proficiency, 2);
        // Sorcerer first: 6 + 0, Warlock: (8/2+1) + 0 = 5 -> 11
        assert_eq!(sheet.hp_max, 11);
        assert_eq!(sheet.class_line(), "Sorcerer 1 / Warlock 1");
    }

    #[test]
    fn test_unknown_race_falls_back_to_first() {
        let book = Rulebook::srd();
        let mut draft = CharacterDraft::new();
        draft.set_race(&book, "gnome");
        assert_eq!(draft.race_id(), "human");
    }
}
