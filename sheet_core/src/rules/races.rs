//! Race definitions

use super::RulesError;
use crate::types::Ability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A playable race: ability bonuses and base movement speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceDefinition {
    pub id: String,
    pub name: String,
    /// Ability bonus map; abilities not listed grant +0
    #[serde(default)]
    pub bonuses: HashMap<Ability, i32>,
    pub speed: u32,
}

impl RaceDefinition {
    /// Bonus for one ability, zero when absent
    pub fn bonus(&self, ability: Ability) -> i32 {
        self.bonuses.get(&ability).copied().unwrap_or(0)
    }
}

/// Container for race definitions in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RacesFile {
    races: Vec<RaceDefinition>,
}

/// Load race definitions from a TOML file
pub fn load_race_defs(path: &Path) -> Result<Vec<RaceDefinition>, RulesError> {
    let file: RacesFile = super::load_toml(path)?;
    Ok(file.races)
}

/// Load race definitions from a TOML string
pub fn parse_race_defs(content: &str) -> Result<Vec<RaceDefinition>, RulesError> {
    let file: RacesFile = super::parse_toml(content)?;
    Ok(file.races)
}

/// The shipped race table
pub fn default_races() -> Vec<RaceDefinition> {
    let toml = include_str!("../../config/races.toml");
    parse_race_defs(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_races() {
        let toml = r#"
[[races]]
id = "human"
name = "Human"
speed = 30

[races.bonuses]
str = 1
dex = 1
"#;
        let races = parse_race_defs(toml).unwrap();
        assert_eq!(races.len(), 1);
        assert_eq!(races[0].bonus(Ability::Str), 1);
        assert_eq!(races[0].bonus(Ability::Cha), 0);
    }

    #[test]
    fn test_default_races_bonuses() {
        let races = default_races();
        let elf = races.iter().find(|r| r.id == "high_elf").unwrap();
        assert_eq!(elf.bonus(Ability::Dex), 2);
        assert_eq!(elf.bonus(Ability::Int), 1);
        assert_eq!(elf.speed, 30);

        let dwarf = races.iter().find(|r| r.id == "mountain_dwarf").unwrap();
        assert_eq!(dwarf.speed, 25);
    }
}
