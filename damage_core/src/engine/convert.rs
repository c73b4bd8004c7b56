//! ConversionEngine - Walks damage down the conversion topology
//!
//! Each call splits an amount of one type into the part that stays and the
//! parts that move along outgoing edges. The part that stays is finalized
//! with the modifiers of every type on its path; moving parts recurse with
//! the current type added to their path.

use super::aggregator::ModifierAggregator;
use super::breakdown::DamageContribution;
use super::path::DamagePath;
use crate::conversion::topology::chaos_edge;
use crate::conversion::{ConversionScaler, NodeSplit};
use crate::damage::DamageVector;
use crate::profile::CharacterDamageProfile;
use crate::types::DamageType;

/// Evaluates a profile's damage, one root type at a time
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine<'a> {
    profile: &'a CharacterDamageProfile,
    scaler: ConversionScaler<'a>,
    aggregator: ModifierAggregator<'a>,
}

impl<'a> ConversionEngine<'a> {
    pub fn new(profile: &'a CharacterDamageProfile) -> Self {
        ConversionEngine {
            profile,
            scaler: ConversionScaler::new(
                &profile.skill_conversions,
                &profile.gear_conversions,
                &profile.extra_damage_as,
            ),
            aggregator: ModifierAggregator::new(&profile.modifiers),
        }
    }

    /// Damage a root type starts with: base plus flat added
    pub fn root_amount(&self, damage_type: DamageType) -> f64 {
        self.profile.base_damage.get(damage_type) + self.profile.modifiers.get(damage_type).added
    }

    /// Final damage from every root type
    pub fn evaluate(&self) -> DamageVector {
        self.evaluate_with(&mut |_: DamageContribution| {})
    }

    /// Final damage from every root type, reporting each finalized slice
    pub fn evaluate_with<F>(&self, on_leaf: &mut F) -> DamageVector
    where
        F: FnMut(DamageContribution),
    {
        DamageType::all()
            .iter()
            .map(|&dt| self.convert_with(self.root_amount(dt), dt, DamagePath::empty(), on_leaf))
            .sum()
    }

    /// Final damage produced by `amount` of a type that has already been `path`
    pub fn convert(&self, amount: f64, damage_type: DamageType, path: DamagePath) -> DamageVector {
        self.convert_with(amount, damage_type, path, &mut |_: DamageContribution| {})
    }

    fn convert_with<F>(
        &self,
        amount: f64,
        damage_type: DamageType,
        path: DamagePath,
        on_leaf: &mut F,
    ) -> DamageVector
    where
        F: FnMut(DamageContribution),
    {
        if amount <= 0.0 {
            return DamageVector::EMPTY;
        }

        let path = path.with(damage_type);
        let split = self.split(damage_type, amount);

        let scaled = self.aggregator.scale(split.remainder, path);
        tracing::trace!(
            "{} leaf via {}: {:.3} -> {:.3}",
            damage_type,
            path,
            split.remainder,
            scaled
        );
        // Fully converted nodes leave no slice behind
        if split.remainder > 0.0 {
            on_leaf(DamageContribution {
                damage_type,
                path,
                unscaled: split.remainder,
                scaled,
            });
        }

        let mut result = DamageVector::of_type(damage_type, scaled);
        for (edge, converted) in split.edges {
            if converted > 0.0 {
                result += self.convert_with(converted, edge.target(), path, on_leaf);
            }
        }
        result
    }

    /// Scaler split plus the global "as extra chaos" bonuses
    fn split(&self, damage_type: DamageType, amount: f64) -> NodeSplit {
        let mut split = self.scaler.split(damage_type, amount);

        if let Some(edge) = chaos_edge(damage_type) {
            let mut extra_chaos = amount * self.profile.non_chaos_as_extra_chaos;
            if damage_type.is_elemental() {
                extra_chaos += amount * self.profile.elemental_as_extra_chaos;
            }
            if extra_chaos != 0.0 {
                split.add_to_edge(edge, extra_chaos);
            }
        }

        split
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{ConversionEdge, ConversionTable};
    use crate::damage::ModifierSet;
    use crate::types::ModifierType;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zero_amount_contributes_nothing() {
        let profile = CharacterDamageProfile::default();
        let engine = ConversionEngine::new(&profile);

        assert_eq!(
            engine.convert(0.0, DamageType::Physical, DamagePath::empty()),
            DamageVector::EMPTY
        );
    }

    #[test]
    fn test_chaos_is_only_scaled() {
        let profile = CharacterDamageProfile::new(DamageVector::of_type(DamageType::Chaos, 50.0))
            .with_modifiers(ModifierSet::default().with_increased(0.5, DamageType::Chaos))
            .with_non_chaos_as_extra_chaos(1.0);
        let engine = ConversionEngine::new(&profile);
        let damage = engine.evaluate();

        assert!(approx(damage.chaos, 75.0));
        assert!(approx(damage.total(), 75.0));
    }

    #[test]
    fn test_added_damage_joins_root_amount() {
        let profile = CharacterDamageProfile::new(DamageVector::of_type(DamageType::Fire, 10.0))
            .with_modifiers(
                ModifierSet::default()
                    .with_added(5.0, DamageType::Fire)
                    .with_added(7.0, DamageType::Lightning),
            );
        let engine = ConversionEngine::new(&profile);

        assert!(approx(engine.root_amount(DamageType::Fire), 15.0));
        let damage = engine.evaluate();
        assert!(approx(damage.fire, 15.0));
        assert!(approx(damage.lightning, 7.0));
    }

    #[test]
    fn test_elemental_as_extra_chaos_only_from_elements() {
        let profile = CharacterDamageProfile::new(DamageVector::new(100.0, 100.0, 0.0, 0.0, 0.0))
            .with_elemental_as_extra_chaos(0.1);
        let damage = ConversionEngine::new(&profile).evaluate();

        assert!(approx(damage.physical, 100.0));
        assert!(approx(damage.fire, 100.0));
        assert!(approx(damage.chaos, 10.0));
    }

    #[test]
    fn test_both_chaos_bonuses_stack_on_elements() {
        let profile = CharacterDamageProfile::new(DamageVector::of_type(DamageType::Cold, 100.0))
            .with_elemental_as_extra_chaos(0.1)
            .with_non_chaos_as_extra_chaos(0.2);
        let damage = ConversionEngine::new(&profile).evaluate();

        assert!(approx(damage.cold, 100.0));
        assert!(approx(damage.chaos, 30.0));
    }

    #[test]
    fn test_chain_conversion_applies_each_modifier_once() {
        // Physical -> Lightning -> Cold -> Fire, fully converted at every step
        let skill = ConversionTable::default()
            .with(ConversionEdge::PhysicalToLightning, 1.0)
            .with(ConversionEdge::LightningToCold, 1.0)
            .with(ConversionEdge::ColdToFire, 1.0);
        let modifiers = ModifierSet::default()
            .with_increased(0.1, DamageType::Physical)
            .with_increased(0.1, DamageType::Lightning)
            .with_increased(0.1, DamageType::Cold)
            .with_increased(0.1, DamageType::Fire)
            .with_more(1.0, ModifierType::Elemental);
        let profile =
            CharacterDamageProfile::new(DamageVector::of_type(DamageType::Physical, 100.0))
                .with_skill_conversions(skill)
                .with_modifiers(modifiers);

        let damage = ConversionEngine::new(&profile).evaluate();

        // 100 × (1 + 0.4) × 2.0, Elemental more counted once
        assert!(approx(damage.fire, 280.0));
        assert!(approx(damage.total(), 280.0));
    }

    #[test]
    fn test_chaos_leaf_after_elemental_path() {
        // Cold -> Fire -> Chaos, every modifier on the way counted once
        let skill = ConversionTable::default()
            .with(ConversionEdge::ColdToFire, 1.0)
            .with(ConversionEdge::FireToChaos, 1.0);
        let modifiers = ModifierSet::default()
            .with_increased(0.1, DamageType::Cold)
            .with_increased(0.1, DamageType::Fire)
            .with_increased(0.1, ModifierType::Elemental)
            .with_increased(0.1, DamageType::Chaos)
            .with_increased(5.0, DamageType::Physical)
            .with_more(1.0, ModifierType::Elemental)
            .with_more(0.5, DamageType::Chaos);
        let profile = CharacterDamageProfile::new(DamageVector::of_type(DamageType::Cold, 100.0))
            .with_skill_conversions(skill)
            .with_modifiers(modifiers);

        let mut leaves = Vec::new();
        let damage = ConversionEngine::new(&profile)
            .evaluate_with(&mut |leaf: DamageContribution| leaves.push(leaf));

        // 100 × (1 + 0.4) × 2.0 × 1.5; physical is never on the path
        assert!(approx(damage.chaos, 420.0));
        assert!(approx(damage.total(), 420.0));

        // Fully converted cold and fire leave no slices behind
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].damage_type, DamageType::Chaos);
        assert_eq!(leaves[0].path.len(), 3);
        assert!(!leaves[0].path.contains(DamageType::Physical));
    }

    #[test]
    fn test_fully_converted_node_is_not_a_leaf() {
        let base = DamageVector::of_type(DamageType::Physical, 100.0);
        let profile = CharacterDamageProfile::new(base)
            .with_skill_conversions(
                ConversionTable::default().with(ConversionEdge::PhysicalToLightning, 0.08),
            )
            .with_gear_conversions(
                ConversionTable::default().with(ConversionEdge::PhysicalToFire, 1.16),
            );

        let mut leaves = Vec::new();
        let damage = ConversionEngine::new(&profile)
            .evaluate_with(&mut |leaf: DamageContribution| leaves.push(leaf));

        assert_eq!(damage.physical, 0.0);
        assert!(leaves.iter().all(|leaf| leaf.damage_type != DamageType::Physical));
        assert_eq!(leaves.len(), 2);
    }

    #[test]
    fn test_convert_with_existing_path() {
        let profile = CharacterDamageProfile::default()
            .with_modifiers(ModifierSet::default().with_increased(1.0, DamageType::Physical));
        let engine = ConversionEngine::new(&profile);

        let from_physical = engine.convert(
            10.0,
            DamageType::Fire,
            DamagePath::empty().with(DamageType::Physical),
        );
        let fresh = engine.convert(10.0, DamageType::Fire, DamagePath::empty());

        assert!(approx(from_physical.fire, 20.0));
        assert!(approx(fresh.fire, 10.0));
    }
}
