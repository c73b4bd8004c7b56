//! DamageBreakdown - Every finalized slice behind a damage result

use super::path::DamagePath;
use crate::damage::DamageVector;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A slice of damage finalized as one type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageContribution {
    /// Type the slice is dealt as
    pub damage_type: DamageType,
    /// Every type the slice has been, including `damage_type`
    pub path: DamagePath,
    /// Amount before Increased/More scaling
    pub unscaled: f64,
    /// Amount after Increased/More scaling
    pub scaled: f64,
}

impl DamageContribution {
    /// Combined Increased × More multiplier applied to this slice
    pub fn multiplier(&self) -> f64 {
        if self.unscaled == 0.0 {
            0.0
        } else {
            self.scaled / self.unscaled
        }
    }
}

/// Finalized slices in evaluation order (roots in type order, depth first)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub contributions: Vec<DamageContribution>,
}

impl DamageBreakdown {
    /// Sum of all slices
    pub fn total(&self) -> DamageVector {
        self.contributions
            .iter()
            .map(|c| DamageVector::of_type(c.damage_type, c.scaled))
            .sum()
    }

    /// Slices dealt as a given type
    pub fn contributions_of(
        &self,
        damage_type: DamageType,
    ) -> impl Iterator<Item = &DamageContribution> + '_ {
        self.contributions
            .iter()
            .filter(move |c| c.damage_type == damage_type)
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}

impl fmt::Display for DamageBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.contributions {
            writeln!(
                f,
                "{:>9} via {}: {:.1} x{:.3} = {:.1}",
                c.damage_type.name(),
                c.path,
                c.unscaled,
                c.multiplier(),
                c.scaled
            )?;
        }
        write!(f, "total: {}", self.total())
    }
}
