//! Class definitions

use super::RulesError;
use crate::types::Ability;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A playable class: hit die and primary attack ability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub id: String,
    pub name: String,
    /// Hit die faces, one of 6/8/10/12
    pub hit_die: u32,
    /// Ability used for attack rolls
    pub primary: Ability,
}

/// Container for class definitions in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClassesFile {
    classes: Vec<ClassDefinition>,
}

/// Load class definitions from a TOML file
pub fn load_class_defs(path: &Path) -> Result<Vec<ClassDefinition>, RulesError> {
    let file: ClassesFile = super::load_toml(path)?;
    Ok(file.classes)
}

/// Load class definitions from a TOML string
pub fn parse_class_defs(content: &str) -> Result<Vec<ClassDefinition>, RulesError> {
    let file: ClassesFile = super::parse_toml(content)?;
    Ok(file.classes)
}

/// The shipped class table
pub fn default_classes() -> Vec<ClassDefinition> {
    let toml = include_str!("../../config/classes.toml");
    parse_class_defs(toml).unwrap_or_default()
}
