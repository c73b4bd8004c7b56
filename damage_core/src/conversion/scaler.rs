//! ConversionScaler - Caps skill and gear conversion at a node
//!
//! Skill conversion is applied first and is only scaled down when its own
//! total exceeds 100%. Gear conversion fills whatever room skill conversion
//! leaves, scaled to fit. "Gained as extra" damage is never scaled.

use super::table::ConversionTable;
use super::topology::{outgoing_edges, ConversionEdge};
use crate::types::DamageType;

/// Kept fractions at or below this are rounding noise from fully converted nodes
const KEPT_EPSILON: f64 = 1e-12;

/// Scale factors applied to a node's skill and gear fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    /// Sum of skill fractions leaving the node
    pub total_skill: f64,
    /// Sum of gear fractions leaving the node
    pub total_gear: f64,
    pub skill: f64,
    pub gear: f64,
}

impl ScaleFactors {
    /// Fraction of the node's damage that gets converted away
    pub fn converted_fraction(&self) -> f64 {
        self.total_skill * self.skill + self.total_gear * self.gear
    }

    /// Fraction of the node's damage that stays as its own type, never negative
    pub fn kept_fraction(&self) -> f64 {
        let kept = 1.0 - self.converted_fraction();
        if kept > KEPT_EPSILON {
            kept
        } else {
            0.0
        }
    }
}

/// How a node's incoming damage splits between staying and each edge
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSplit {
    /// Damage that stays as the node's own type
    pub remainder: f64,
    /// Amount leaving along each outgoing edge, in topology order
    pub edges: Vec<(ConversionEdge, f64)>,
}

impl NodeSplit {
    /// Amount leaving along an edge
    pub fn edge_amount(&self, edge: ConversionEdge) -> f64 {
        self.edges
            .iter()
            .filter(|(e, _)| *e == edge)
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Add extra damage to an outgoing edge
    pub fn add_to_edge(&mut self, edge: ConversionEdge, amount: f64) {
        if let Some(existing) = self.edges.iter_mut().find(|(e, _)| *e == edge) {
            existing.1 += amount;
        } else {
            self.edges.push((edge, amount));
        }
    }
}

/// Splits node damage using the skill, gear and extra-damage tables
#[derive(Debug, Clone, Copy)]
pub struct ConversionScaler<'a> {
    skill: &'a ConversionTable,
    gear: &'a ConversionTable,
    extra: &'a ConversionTable,
}

impl<'a> ConversionScaler<'a> {
    pub fn new(
        skill: &'a ConversionTable,
        gear: &'a ConversionTable,
        extra: &'a ConversionTable,
    ) -> Self {
        ConversionScaler { skill, gear, extra }
    }

    /// Compute the skill and gear scale factors for a node
    pub fn scale_factors(&self, damage_type: DamageType) -> ScaleFactors {
        let total_skill = self.skill.outgoing_total(damage_type);
        let skill = if total_skill > 1.0 { 1.0 / total_skill } else { 1.0 };

        let room = (1.0 - total_skill).max(0.0);
        let total_gear = self.gear.outgoing_total(damage_type);
        // TODO: confirm whether gear that fits inside partial room should keep factor 1.0
        let gear = if total_gear > room {
            tracing::trace!(
                "{} gear conversion {:.3} scaled to fit room {:.3}",
                damage_type,
                total_gear,
                room
            );
            room / total_gear
        } else {
            room
        };

        ScaleFactors {
            total_skill,
            total_gear,
            skill,
            gear,
        }
    }

    /// Split `incoming` damage of a type into remainder and per-edge amounts
    pub fn split(&self, damage_type: DamageType, incoming: f64) -> NodeSplit {
        let factors = self.scale_factors(damage_type);

        let edges = outgoing_edges(damage_type)
            .iter()
            .map(|&edge| {
                let amount = incoming * self.skill.get(edge) * factors.skill
                    + incoming * self.gear.get(edge) * factors.gear
                    + incoming * self.extra.get(edge);
                (edge, amount)
            })
            .collect();

        NodeSplit {
            remainder: incoming * factors.kept_fraction(),
            edges,
        }
    }
}
