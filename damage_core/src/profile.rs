//! CharacterDamageProfile - Everything the engine needs to evaluate a hit

use crate::conversion::ConversionTable;
use crate::damage::{DamageVector, ModifierSet};
use crate::engine::{self, DamageBreakdown};
use serde::{Deserialize, Serialize};

/// A character's base damage plus all conversion and scaling inputs
///
/// Assembled by gear/passive/skill loading code; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterDamageProfile {
    /// Base damage, e.g. from the equipped weapon or spell
    #[serde(default)]
    pub base_damage: DamageVector,

    #[serde(default)]
    pub modifiers: ModifierSet,

    // === Conversions ===
    /// Conversion granted by skills; takes precedence over all other sources
    #[serde(default)]
    pub skill_conversions: ConversionTable,
    /// Conversion from passives and gear
    #[serde(default)]
    pub gear_conversions: ConversionTable,
    /// Summed "X% of Y damage added as Z damage" from every source
    #[serde(default)]
    pub extra_damage_as: ConversionTable,

    // === Extra Chaos ===
    #[serde(default)]
    pub non_chaos_as_extra_chaos: f64,
    #[serde(default)]
    pub elemental_as_extra_chaos: f64,
}

impl CharacterDamageProfile {
    pub fn new(base_damage: DamageVector) -> Self {
        CharacterDamageProfile {
            base_damage,
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: ModifierSet) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_skill_conversions(mut self, conversions: ConversionTable) -> Self {
        self.skill_conversions = conversions;
        self
    }

    pub fn with_gear_conversions(mut self, conversions: ConversionTable) -> Self {
        self.gear_conversions = conversions;
        self
    }

    pub fn with_extra_damage_as(mut self, extra: ConversionTable) -> Self {
        self.extra_damage_as = extra;
        self
    }

    pub fn with_non_chaos_as_extra_chaos(mut self, fraction: f64) -> Self {
        self.non_chaos_as_extra_chaos = fraction;
        self
    }

    pub fn with_elemental_as_extra_chaos(mut self, fraction: f64) -> Self {
        self.elemental_as_extra_chaos = fraction;
        self
    }

    /// Final damage dealt
    pub fn calculate_damage(&self) -> DamageVector {
        engine::calculate_damage(self)
    }

    /// Final damage with every finalized slice listed
    pub fn calculate_breakdown(&self) -> DamageBreakdown {
        engine::calculate_damage_breakdown(self)
    }
}
