//! DamageModifier and ModifierSet - The Added → Increased → More layers per type

use crate::types::ModifierType;
use serde::{Deserialize, Serialize};

/// Modifier layers for a single damage category
///
/// Scaled damage is `(base + added) × (1 + increased) × more`.
///
/// - `added`: Flat damage, in damage units
/// - `increased`: Sum of all increased% (as decimal, e.g., 0.30 = 30%)
/// - `more`: Product of all more multipliers (1.0 = no change)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageModifier {
    #[serde(default)]
    pub added: f64,
    #[serde(default)]
    pub increased: f64,
    #[serde(default = "default_more")]
    pub more: f64,
}

fn default_more() -> f64 {
    1.0
}

impl Default for DamageModifier {
    fn default() -> Self {
        DamageModifier {
            added: 0.0,
            increased: 0.0,
            more: 1.0,
        }
    }
}

impl DamageModifier {
    /// Total increased multiplier (1 + sum of increased%)
    pub fn increased_multiplier(&self) -> f64 {
        1.0 + self.increased
    }

    /// Check if this modifier changes nothing
    pub fn is_neutral(&self) -> bool {
        self.added == 0.0 && self.increased == 0.0 && (self.more - 1.0).abs() < f64::EPSILON
    }
}

/// Added/Increased/More modifiers for every damage category
///
/// Every category is always present; the `with_*` builders return a new
/// independent set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierSet {
    #[serde(default)]
    pub physical: DamageModifier,
    #[serde(default)]
    pub fire: DamageModifier,
    #[serde(default)]
    pub cold: DamageModifier,
    #[serde(default)]
    pub lightning: DamageModifier,
    #[serde(default)]
    pub chaos: DamageModifier,
    #[serde(default)]
    pub elemental: DamageModifier,
}

impl ModifierSet {
    /// Get the modifier for a category
    pub fn get(&self, modifier_type: impl Into<ModifierType>) -> &DamageModifier {
        match modifier_type.into() {
            ModifierType::Physical => &self.physical,
            ModifierType::Fire => &self.fire,
            ModifierType::Cold => &self.cold,
            ModifierType::Lightning => &self.lightning,
            ModifierType::Chaos => &self.chaos,
            ModifierType::Elemental => &self.elemental,
        }
    }

    fn get_mut(&mut self, modifier_type: ModifierType) -> &mut DamageModifier {
        match modifier_type {
            ModifierType::Physical => &mut self.physical,
            ModifierType::Fire => &mut self.fire,
            ModifierType::Cold => &mut self.cold,
            ModifierType::Lightning => &mut self.lightning,
            ModifierType::Chaos => &mut self.chaos,
            ModifierType::Elemental => &mut self.elemental,
        }
    }

    /// Add flat damage to a category
    pub fn with_added(mut self, amount: f64, modifier_type: impl Into<ModifierType>) -> Self {
        self.get_mut(modifier_type.into()).added += amount;
        self
    }

    /// Add an increased% bonus (as decimal, e.g., 0.40 for 40%)
    pub fn with_increased(mut self, amount: f64, modifier_type: impl Into<ModifierType>) -> Self {
        self.get_mut(modifier_type.into()).increased += amount;
        self
    }

    /// Add a more% multiplier (as decimal, e.g., 0.20 for 20% more)
    ///
    /// More multipliers from different sources stack multiplicatively.
    pub fn with_more(mut self, amount: f64, modifier_type: impl Into<ModifierType>) -> Self {
        self.get_mut(modifier_type.into()).more *= 1.0 + amount;
        self
    }

    /// Check if no category changes anything
    pub fn is_neutral(&self) -> bool {
        ModifierType::all().iter().all(|&mt| self.get(mt).is_neutral())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DamageType;

    #[test]
    fn test_default_is_neutral() {
        let set = ModifierSet::default();
        assert!(set.is_neutral());
        for &mt in ModifierType::all() {
            assert!((set.get(mt).more - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_multiple_increased_stack_additively() {
        let set = ModifierSet::default()
            .with_increased(0.80, DamageType::Physical)
            .with_increased(0.30, DamageType::Physical);
        assert!((set.physical.increased - 1.10).abs() < 1e-12);
        assert!((set.physical.increased_multiplier() - 2.10).abs() < 1e-12);
    }

    #[test]
    fn test_multiple_more_stack_multiplicatively() {
        let set = ModifierSet::default()
            .with_more(0.20, ModifierType::Elemental)
            .with_more(0.30, ModifierType::Elemental);
        // 1.2 * 1.3 = 1.56, not 1.5
        assert!((set.elemental.more - 1.56).abs() < 1e-12);
    }

    #[test]
    fn test_added_sums() {
        let set = ModifierSet::default()
            .with_added(30.0, DamageType::Cold)
            .with_added(5.0, DamageType::Cold);
        assert!((set.get(DamageType::Cold).added - 35.0).abs() < f64::EPSILON);
        assert!(set.get(DamageType::Fire).is_neutral());
    }

    #[test]
    fn test_builder_yields_independent_values() {
        let base = ModifierSet::default().with_increased(0.5, DamageType::Fire);
        let derived = base.with_increased(0.5, DamageType::Fire);

        assert!((base.fire.increased - 0.5).abs() < f64::EPSILON);
        assert!((derived.fire.increased - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_partial() {
        let set: ModifierSet = toml::from_str(
            r#"
[cold]
added = 30

[elemental]
more = 1.7
"#,
        )
        .unwrap();

        assert!((set.cold.added - 30.0).abs() < f64::EPSILON);
        assert!((set.cold.more - 1.0).abs() < f64::EPSILON);
        assert!((set.elemental.more - 1.7).abs() < f64::EPSILON);
        assert!(set.physical.is_neutral());
    }
}
