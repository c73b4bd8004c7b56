//! Damage engine - turning a CharacterDamageProfile into final damage
//!
//! Evaluation order:
//! 1. Each damage type starts with its base damage plus flat added damage
//! 2. At every type, skill conversion then gear conversion split the damage;
//!    "gained as extra" and "as extra chaos" damage is added on top
//! 3. The part that stays is scaled by Increased/More of every distinct type
//!    it has been (plus Elemental once, if any of them is elemental)
//! 4. Converted parts repeat from step 2 at their new type

mod aggregator;
mod breakdown;
mod convert;
mod path;

pub use aggregator::ModifierAggregator;
pub use breakdown::{DamageBreakdown, DamageContribution};
pub use convert::ConversionEngine;
pub use path::DamagePath;

use crate::damage::DamageVector;
use crate::profile::CharacterDamageProfile;

/// Calculate final damage for a profile
pub fn calculate_damage(profile: &CharacterDamageProfile) -> DamageVector {
    let damage = ConversionEngine::new(profile).evaluate();
    tracing::debug!("calculated damage: {}", damage);
    damage
}

/// Calculate final damage for a profile, keeping every finalized slice
pub fn calculate_damage_breakdown(profile: &CharacterDamageProfile) -> DamageBreakdown {
    let mut contributions = Vec::new();
    let damage = ConversionEngine::new(profile).evaluate_with(&mut |c| contributions.push(c));
    tracing::debug!(
        "calculated damage: {} from {} slices",
        damage,
        contributions.len()
    );
    DamageBreakdown { contributions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{ConversionEdge, ConversionTable};
    use crate::damage::ModifierSet;
    use crate::types::{DamageType, ModifierType};

    #[test]
    fn test_no_conversion_no_modifiers_is_identity() {
        let base = DamageVector::new(10.0, 20.0, 30.0, 40.0, 50.0);
        let damage = calculate_damage(&CharacterDamageProfile::new(base));
        assert_eq!(damage, base);
    }

    #[test]
    fn test_skill_over_cap_blocks_gear() {
        let base = DamageVector::of_type(DamageType::Physical, 100.0);
        let profile = CharacterDamageProfile::new(base)
            .with_skill_conversions(
                ConversionTable::default()
                    .with(ConversionEdge::PhysicalToFire, 0.8)
                    .with(ConversionEdge::PhysicalToCold, 0.8),
            )
            .with_gear_conversions(
                ConversionTable::default().with(ConversionEdge::PhysicalToLightning, 1.0),
            );

        let damage = calculate_damage(&profile);
        assert!(damage.lightning.abs() < 1e-9);
        assert!((damage.fire - 50.0).abs() < 1e-9);
        assert!((damage.cold - 50.0).abs() < 1e-9);
        assert!(damage.physical.abs() < 1e-9);
    }

    #[test]
    fn test_elemental_modifier_once_through_cold_and_fire() {
        let profile = CharacterDamageProfile::new(DamageVector::of_type(DamageType::Cold, 100.0))
            .with_skill_conversions(
                ConversionTable::default().with(ConversionEdge::ColdToFire, 1.0),
            )
            .with_modifiers(
                ModifierSet::default()
                    .with_increased(0.5, ModifierType::Elemental)
                    .with_more(0.5, ModifierType::Elemental),
            );

        let damage = calculate_damage(&profile);
        // 100 × 1.5 × 1.5, not 100 × 2.0 × 2.25
        assert!((damage.fire - 225.0).abs() < 1e-9);
        assert!(damage.cold.abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_matches_damage() {
        let profile = CharacterDamageProfile::new(DamageVector::new(100.0, 0.0, 20.0, 0.0, 5.0))
            .with_gear_conversions(
                ConversionTable::default().with(ConversionEdge::PhysicalToCold, 0.5),
            )
            .with_extra_damage_as(ConversionTable::default().with(ConversionEdge::ColdToFire, 0.2))
            .with_modifiers(ModifierSet::default().with_increased(0.4, DamageType::Cold));

        let damage = calculate_damage(&profile);
        let breakdown = calculate_damage_breakdown(&profile);
        let total = breakdown.total();

        for &dt in DamageType::all() {
            assert!((damage.get(dt) - total.get(dt)).abs() < 1e-9, "{:?}", dt);
        }
        // physical, cold (root), fire (from root cold), cold (from physical),
        // fire (from converted cold), chaos
        assert_eq!(breakdown.len(), 6);
        assert!(breakdown
            .contributions
            .iter()
            .all(|c| c.path.contains(c.damage_type)));
    }
}
