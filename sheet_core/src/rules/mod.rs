//! Rules tables loaded from TOML files
//!
//! Races, classes and spells are immutable lookup data: loaded once,
//! keyed by identifier, never mutated afterwards.

mod classes;
mod races;
mod spells;

pub use classes::{load_class_defs, parse_class_defs, ClassDefinition};
pub use races::{load_race_defs, parse_race_defs, RaceDefinition};
pub use spells::{load_spell_defs, parse_spell_defs, SpellDefinition};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Rules loading error
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read rules file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Rules validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, RulesError> {
    let content = fs::read_to_string(path)?;
    let parsed: T = toml::from_str(&content)?;
    Ok(parsed)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, RulesError> {
    let parsed: T = toml::from_str(content)?;
    Ok(parsed)
}

/// Immutable rule database: races, classes and spells
///
/// Tables keep their file order so menus render deterministically;
/// lookups go by identifier.
#[derive(Debug, Clone)]
pub struct Rulebook {
    races: Vec<RaceDefinition>,
    classes: Vec<ClassDefinition>,
    spells: Vec<SpellDefinition>,
}

impl Rulebook {
    /// The shipped SRD-flavored tables, embedded at compile time
    pub fn srd() -> Self {
        Rulebook {
            races: races::default_races(),
            classes: classes::default_classes(),
            spells: spells::default_spells(),
        }
    }

    /// Load all three tables from a directory containing
    /// `races.toml`, `classes.toml` and `spells.toml`
    pub fn load_from_dir(dir: &Path) -> Result<Self, RulesError> {
        let book = Rulebook {
            races: load_race_defs(&dir.join("races.toml"))?,
            classes: load_class_defs(&dir.join("classes.toml"))?,
            spells: load_spell_defs(&dir.join("spells.toml"))?,
        };
        book.validate()?;
        Ok(book)
    }

    fn validate(&self) -> Result<(), RulesError> {
        for class in &self.classes {
            if ![6, 8, 10, 12].contains(&class.hit_die) {
                return Err(RulesError::ValidationError(format!(
                    "class '{}' has invalid hit die d{}",
                    class.id, class.hit_die
                )));
            }
        }
        for spell in &self.spells {
            if !spell.utility && spell.dice.is_none() {
                return Err(RulesError::ValidationError(format!(
                    "spell '{}' has no damage dice and is not utility",
                    spell.id
                )));
            }
        }
        Ok(())
    }

    pub fn races(&self) -> &[RaceDefinition] {
        &self.races
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn spells(&self) -> &[SpellDefinition] {
        &self.spells
    }

    pub fn race(&self, id: &str) -> Option<&RaceDefinition> {
        self.races.iter().find(|r| r.id == id)
    }

    pub fn class(&self, id: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn spell(&self, id: &str) -> Option<&SpellDefinition> {
        self.spells.iter().find(|s| s.id == id)
    }

    /// Find a race by its display name (save files store names)
    pub fn race_by_name(&self, name: &str) -> Option<&RaceDefinition> {
        self.races.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srd_table_sizes() {
        let book = Rulebook::srd();
        assert_eq!(book.races().len(), 5);
        assert_eq!(book.classes().len(), 12);
        assert_eq!(book.spells().len(), 8);
    }

    #[test]
    fn test_lookup_by_id() {
        let book = Rulebook::srd();
        assert_eq!(book.race("human").unwrap().name, "Human");
        assert_eq!(book.class("warlock").unwrap().hit_die, 8);
        assert!(book.spell("eldritch_blast").is_some());
        assert!(book.spell("wish").is_none());
    }

    #[test]
    fn test_race_by_name() {
        let book = Rulebook::srd();
        assert_eq!(book.race_by_name("Mountain Dwarf").unwrap().id, "mountain_dwarf");
        assert!(book.race_by_name("Gnome").is_none());
    }
}
