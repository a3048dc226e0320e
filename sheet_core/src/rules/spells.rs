//! Spell definitions

use super::RulesError;
use crate::types::{DamageType, Dice};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A castable spell or at-will attack
///
/// Tier 0 spells ("cantrips") never consume a slot; tier 1+ spells go
/// through the resource pool. Utility spells carry no dice and only
/// produce a descriptive effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellDefinition {
    pub id: String,
    pub name: String,
    /// 0 = at-will, 1+ consumes a spell slot
    pub tier: u32,
    /// Damage dice; absent for utility spells
    #[serde(default)]
    pub dice: Option<Dice>,
    /// Flat bonus added to every damage roll
    #[serde(default)]
    pub fixed_bonus: i32,
    #[serde(default)]
    pub damage_type: Option<DamageType>,
    /// Descriptive effect only, no rolls
    #[serde(default)]
    pub utility: bool,
    /// Skip the to-hit roll (the spell always lands)
    #[serde(default)]
    pub auto_hit: bool,
    /// Fires a second beam once total level reaches this value
    #[serde(default)]
    pub extra_beam_at_level: Option<u32>,
    pub desc: String,
}

impl SpellDefinition {
    /// Number of independent roll cycles at the given character level
    pub fn beam_count(&self, total_level: u32) -> u32 {
        match self.extra_beam_at_level {
            Some(threshold) if total_level >= threshold => 2,
            _ => 1,
        }
    }
}

/// Container for spell definitions in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpellsFile {
    spells: Vec<SpellDefinition>,
}

/// Load spell definitions from a TOML file
pub fn load_spell_defs(path: &Path) -> Result<Vec<SpellDefinition>, RulesError> {
    let file: SpellsFile = super::load_toml(path)?;
    Ok(file.spells)
}

/// Load spell definitions from a TOML string
pub fn parse_spell_defs(content: &str) -> Result<Vec<SpellDefinition>, RulesError> {
    let file: SpellsFile = super::parse_toml(content)?;
    Ok(file.spells)
}

/// The shipped spellbook
pub fn default_spells() -> Vec<SpellDefinition> {
    let toml = include_str!("../../config/spells.toml");
    parse_spell_defs(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spell() {
        let toml = r#"
[[spells]]
id = "magic_missile"
name = "Magic Missile"
tier = 1
dice = { count = 3, faces = 4 }
fixed_bonus = 3
damage_type = "force"
auto_hit = true
desc = "3 unerring darts"
"#;
        let spells = parse_spell_defs(toml).unwrap();
        let mm = &spells[0];
        assert_eq!(mm.dice, Some(Dice::new(3, 4)));
        assert_eq!(mm.fixed_bonus, 3);
        assert!(mm.auto_hit);
        assert!(!mm.utility);
    }

    #[test]
    fn test_beam_count_threshold() {
        let spells = default_spells();
        let blast = spells.iter().find(|s| s.id == "eldritch_blast").unwrap();

        assert_eq!(blast.extra_beam_at_level, Some(5));
        assert_eq!(blast.beam_count(1), 1);
        assert_eq!(blast.beam_count(4), 1);
        assert_eq!(blast.beam_count(5), 2);
        assert_eq!(blast.beam_count(20), 2);

        let bolt = spells.iter().find(|s| s.id == "fire_bolt").unwrap();
        assert_eq!(bolt.beam_count(20), 1);
    }

    #[test]
    fn test_default_spellbook_shape() {
        let spells = default_spells();
        assert_eq!(spells.len(), 8);

        let utilities: Vec<&str> = spells
            .iter()
            .filter(|s| s.utility)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(utilities, vec!["shield", "mage_armor", "alarm"]);

        // Every non-utility spell carries dice
        assert!(spells.iter().filter(|s| !s.utility).all(|s| s.dice.is_some()));
    }
}
