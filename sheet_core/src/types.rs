//! Core types shared across the rules and combat modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    /// All six abilities in sheet order
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Str,
            Ability::Dex,
            Ability::Con,
            Ability::Int,
            Ability::Wis,
            Ability::Cha,
        ]
    }

    /// Short lowercase key, matching the save-file schema
    pub fn key(&self) -> &'static str {
        match self {
            Ability::Str => "str",
            Ability::Dex => "dex",
            Ability::Con => "con",
            Ability::Int => "int",
            Ability::Wis => "wis",
            Ability::Cha => "cha",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Damage type tag carried on spell definitions and damage events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Force,
    Fire,
    Lightning,
    Psychic,
    Radiant,
    Necrotic,
    Cold,
    Physical,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DamageType::Force => "Force",
            DamageType::Fire => "Fire",
            DamageType::Lightning => "Lightning",
            DamageType::Psychic => "Psychic",
            DamageType::Radiant => "Radiant",
            DamageType::Necrotic => "Necrotic",
            DamageType::Cold => "Cold",
            DamageType::Physical => "Physical",
        };
        write!(f, "{}", name)
    }
}

/// Damage dice as (count, faces), e.g. 3d4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub count: u32,
    pub faces: u32,
}

impl Dice {
    pub fn new(count: u32, faces: u32) -> Self {
        Dice { count, faces }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}
