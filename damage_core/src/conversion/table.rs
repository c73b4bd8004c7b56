//! ConversionTable - One fraction per conversion edge

use super::topology::{outgoing_edges, ConversionEdge};
use crate::types::{DamageError, DamageType};
use serde::{Deserialize, Serialize};

/// Per-edge fractions (0.5 = 50%) for the ten edges of the topology
///
/// The same shape serves skill conversion, gear conversion and
/// "gained as extra" damage; the engine decides how each one is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    // Physical conversions
    #[serde(default)]
    pub physical_to_fire: f64,
    #[serde(default)]
    pub physical_to_cold: f64,
    #[serde(default)]
    pub physical_to_lightning: f64,
    #[serde(default)]
    pub physical_to_chaos: f64,

    // Cold conversions
    #[serde(default)]
    pub cold_to_fire: f64,
    #[serde(default)]
    pub cold_to_chaos: f64,

    // Lightning conversions
    #[serde(default)]
    pub lightning_to_fire: f64,
    #[serde(default)]
    pub lightning_to_cold: f64,
    #[serde(default)]
    pub lightning_to_chaos: f64,

    // Fire can only go to chaos
    #[serde(default)]
    pub fire_to_chaos: f64,
}

impl ConversionTable {
    /// Get the fraction for an edge
    pub fn get(&self, edge: ConversionEdge) -> f64 {
        match edge {
            ConversionEdge::PhysicalToFire => self.physical_to_fire,
            ConversionEdge::PhysicalToCold => self.physical_to_cold,
            ConversionEdge::PhysicalToLightning => self.physical_to_lightning,
            ConversionEdge::PhysicalToChaos => self.physical_to_chaos,
            ConversionEdge::ColdToFire => self.cold_to_fire,
            ConversionEdge::ColdToChaos => self.cold_to_chaos,
            ConversionEdge::LightningToFire => self.lightning_to_fire,
            ConversionEdge::LightningToCold => self.lightning_to_cold,
            ConversionEdge::LightningToChaos => self.lightning_to_chaos,
            ConversionEdge::FireToChaos => self.fire_to_chaos,
        }
    }

    /// Copy of this table with one edge replaced
    pub fn with(mut self, edge: ConversionEdge, value: f64) -> Self {
        let slot = match edge {
            ConversionEdge::PhysicalToFire => &mut self.physical_to_fire,
            ConversionEdge::PhysicalToCold => &mut self.physical_to_cold,
            ConversionEdge::PhysicalToLightning => &mut self.physical_to_lightning,
            ConversionEdge::PhysicalToChaos => &mut self.physical_to_chaos,
            ConversionEdge::ColdToFire => &mut self.cold_to_fire,
            ConversionEdge::ColdToChaos => &mut self.cold_to_chaos,
            ConversionEdge::LightningToFire => &mut self.lightning_to_fire,
            ConversionEdge::LightningToCold => &mut self.lightning_to_cold,
            ConversionEdge::LightningToChaos => &mut self.lightning_to_chaos,
            ConversionEdge::FireToChaos => &mut self.fire_to_chaos,
        };
        *slot = value;
        self
    }

    /// Get the fraction between two types, failing for pairs outside the topology
    pub fn conversion(&self, from: DamageType, to: DamageType) -> Result<f64, DamageError> {
        ConversionEdge::between(from, to).map(|edge| self.get(edge))
    }

    /// Copy of this table with the fraction between two types replaced
    pub fn with_conversion(
        self,
        from: DamageType,
        to: DamageType,
        value: f64,
    ) -> Result<Self, DamageError> {
        ConversionEdge::between(from, to).map(|edge| self.with(edge, value))
    }

    /// Sum of the fractions leaving a node
    pub fn outgoing_total(&self, damage_type: DamageType) -> f64 {
        outgoing_edges(damage_type)
            .iter()
            .map(|&edge| self.get(edge))
            .sum()
    }

    /// Check if there are any conversions defined
    pub fn has_any(&self) -> bool {
        ConversionEdge::all().iter().any(|&edge| self.get(edge) != 0.0)
    }

    /// Edges with a fraction below zero
    pub fn negative_edges(&self) -> impl Iterator<Item = (ConversionEdge, f64)> + '_ {
        ConversionEdge::all()
            .iter()
            .map(move |&edge| (edge, self.get(edge)))
            .filter(|(_, value)| *value < 0.0)
    }
}
