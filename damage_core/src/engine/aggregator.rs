//! ModifierAggregator - Applies Increased and More to a finalized slice
//!
//! A slice is scaled by the modifiers of every distinct type it has been,
//! plus the Elemental modifiers once if any of those types is elemental.
//! Increased sums across the path; More multiplies.

use super::path::DamagePath;
use crate::damage::{DamageModifier, ModifierSet};
use crate::types::ModifierType;

#[derive(Debug, Clone, Copy)]
pub struct ModifierAggregator<'a> {
    modifiers: &'a ModifierSet,
}

impl<'a> ModifierAggregator<'a> {
    pub fn new(modifiers: &'a ModifierSet) -> Self {
        ModifierAggregator { modifiers }
    }

    /// Modifiers that apply along a path, each at most once
    fn applicable(&self, path: DamagePath) -> impl Iterator<Item = &'a DamageModifier> + 'a {
        let modifiers = self.modifiers;
        let elemental = path
            .has_elemental()
            .then(|| modifiers.get(ModifierType::Elemental));

        path.iter()
            .map(move |dt| modifiers.get(dt))
            .chain(elemental)
    }

    /// Sum of increased% along the path
    pub fn total_increased(&self, path: DamagePath) -> f64 {
        self.applicable(path).map(|m| m.increased).sum()
    }

    /// Product of more multipliers along the path
    pub fn total_more(&self, path: DamagePath) -> f64 {
        self.applicable(path).map(|m| m.more).product()
    }

    /// Scale a finalized amount: `amount × (1 + Σ increased) × Π more`
    pub fn scale(&self, amount: f64, path: DamagePath) -> f64 {
        amount * (1.0 + self.total_increased(path)) * self.total_more(path)
    }
}
