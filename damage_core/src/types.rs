//! Core damage types and the lookup errors shared across the crate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a damage type lookup is not defined
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DamageError {
    #[error("Unknown damage type: {0}")]
    UnknownDamageType(String),
    #[error("{0:?} is a modifier category, not a damage type")]
    NotADamageType(ModifierType),
    #[error("{from:?} damage cannot be converted to {to:?}")]
    IllegalConversion { from: DamageType, to: DamageType },
}

/// The five damage types a hit can deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Fire,
    Cold,
    Lightning,
    Chaos,
}

impl DamageType {
    /// All damage types, in evaluation order
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Physical,
            DamageType::Fire,
            DamageType::Cold,
            DamageType::Lightning,
            DamageType::Chaos,
        ]
    }

    /// Fire, Cold and Lightning are elemental
    pub fn is_elemental(&self) -> bool {
        matches!(
            self,
            DamageType::Fire | DamageType::Cold | DamageType::Lightning
        )
    }

    /// Lowercase name, matching the config representation
    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Fire => "fire",
            DamageType::Cold => "cold",
            DamageType::Lightning => "lightning",
            DamageType::Chaos => "chaos",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DamageType {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physical" => Ok(DamageType::Physical),
            "fire" => Ok(DamageType::Fire),
            "cold" => Ok(DamageType::Cold),
            "lightning" => Ok(DamageType::Lightning),
            "chaos" => Ok(DamageType::Chaos),
            _ => Err(DamageError::UnknownDamageType(s.to_string())),
        }
    }
}

/// Modifier categories: every damage type plus the shared Elemental bucket
///
/// Elemental modifiers apply to Fire, Cold and Lightning damage alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierType {
    Physical,
    Fire,
    Cold,
    Lightning,
    Chaos,
    Elemental,
}

impl ModifierType {
    pub fn all() -> &'static [ModifierType] {
        &[
            ModifierType::Physical,
            ModifierType::Fire,
            ModifierType::Cold,
            ModifierType::Lightning,
            ModifierType::Chaos,
            ModifierType::Elemental,
        ]
    }
}

impl From<DamageType> for ModifierType {
    fn from(damage_type: DamageType) -> Self {
        match damage_type {
            DamageType::Physical => ModifierType::Physical,
            DamageType::Fire => ModifierType::Fire,
            DamageType::Cold => ModifierType::Cold,
            DamageType::Lightning => ModifierType::Lightning,
            DamageType::Chaos => ModifierType::Chaos,
        }
    }
}

impl TryFrom<ModifierType> for DamageType {
    type Error = DamageError;

    fn try_from(modifier_type: ModifierType) -> Result<Self, Self::Error> {
        match modifier_type {
            ModifierType::Physical => Ok(DamageType::Physical),
            ModifierType::Fire => Ok(DamageType::Fire),
            ModifierType::Cold => Ok(DamageType::Cold),
            ModifierType::Lightning => Ok(DamageType::Lightning),
            ModifierType::Chaos => Ok(DamageType::Chaos),
            ModifierType::Elemental => Err(DamageError::NotADamageType(modifier_type)),
        }
    }
}

impl FromStr for ModifierType {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("elemental") {
            return Ok(ModifierType::Elemental);
        }
        s.parse::<DamageType>().map(ModifierType::from)
    }
}
