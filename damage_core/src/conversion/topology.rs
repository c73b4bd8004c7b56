//! Conversion topology - which damage type may convert into which
//!
//! Conversion only flows "down" the chain:
//! Physical → Lightning → Cold → Fire → Chaos
//!
//! Physical may skip straight to any later type, and every non-chaos type
//! may go to Chaos. Chaos is terminal.

use crate::types::{DamageError, DamageType};
use serde::{Deserialize, Serialize};

/// A legal directed conversion between two damage types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionEdge {
    PhysicalToFire,
    PhysicalToCold,
    PhysicalToLightning,
    PhysicalToChaos,
    ColdToFire,
    ColdToChaos,
    LightningToFire,
    LightningToCold,
    LightningToChaos,
    FireToChaos,
}

const PHYSICAL_EDGES: &[ConversionEdge] = &[
    ConversionEdge::PhysicalToFire,
    ConversionEdge::PhysicalToCold,
    ConversionEdge::PhysicalToLightning,
    ConversionEdge::PhysicalToChaos,
];
const LIGHTNING_EDGES: &[ConversionEdge] = &[
    ConversionEdge::LightningToFire,
    ConversionEdge::LightningToCold,
    ConversionEdge::LightningToChaos,
];
const COLD_EDGES: &[ConversionEdge] = &[ConversionEdge::ColdToFire, ConversionEdge::ColdToChaos];
const FIRE_EDGES: &[ConversionEdge] = &[ConversionEdge::FireToChaos];

impl ConversionEdge {
    /// All ten edges of the topology
    pub fn all() -> &'static [ConversionEdge] {
        &[
            ConversionEdge::PhysicalToFire,
            ConversionEdge::PhysicalToCold,
            ConversionEdge::PhysicalToLightning,
            ConversionEdge::PhysicalToChaos,
            ConversionEdge::ColdToFire,
            ConversionEdge::ColdToChaos,
            ConversionEdge::LightningToFire,
            ConversionEdge::LightningToCold,
            ConversionEdge::LightningToChaos,
            ConversionEdge::FireToChaos,
        ]
    }

    pub fn source(&self) -> DamageType {
        match self {
            ConversionEdge::PhysicalToFire
            | ConversionEdge::PhysicalToCold
            | ConversionEdge::PhysicalToLightning
            | ConversionEdge::PhysicalToChaos => DamageType::Physical,
            ConversionEdge::ColdToFire | ConversionEdge::ColdToChaos => DamageType::Cold,
            ConversionEdge::LightningToFire
            | ConversionEdge::LightningToCold
            | ConversionEdge::LightningToChaos => DamageType::Lightning,
            ConversionEdge::FireToChaos => DamageType::Fire,
        }
    }

    pub fn target(&self) -> DamageType {
        match self {
            ConversionEdge::PhysicalToFire
            | ConversionEdge::ColdToFire
            | ConversionEdge::LightningToFire => DamageType::Fire,
            ConversionEdge::PhysicalToCold | ConversionEdge::LightningToCold => DamageType::Cold,
            ConversionEdge::PhysicalToLightning => DamageType::Lightning,
            ConversionEdge::PhysicalToChaos
            | ConversionEdge::ColdToChaos
            | ConversionEdge::LightningToChaos
            | ConversionEdge::FireToChaos => DamageType::Chaos,
        }
    }

    /// Look up the edge between two types
    ///
    /// Fails for pairs the topology does not allow (e.g. Fire → Cold, or
    /// anything out of Chaos).
    pub fn between(from: DamageType, to: DamageType) -> Result<ConversionEdge, DamageError> {
        outgoing_edges(from)
            .iter()
            .copied()
            .find(|edge| edge.target() == to)
            .ok_or(DamageError::IllegalConversion { from, to })
    }
}

/// Outgoing edges of a node
pub fn outgoing_edges(damage_type: DamageType) -> &'static [ConversionEdge] {
    match damage_type {
        DamageType::Physical => PHYSICAL_EDGES,
        DamageType::Lightning => LIGHTNING_EDGES,
        DamageType::Cold => COLD_EDGES,
        DamageType::Fire => FIRE_EDGES,
        DamageType::Chaos => &[],
    }
}

/// The chaos edge of a node, if it has one
pub fn chaos_edge(damage_type: DamageType) -> Option<ConversionEdge> {
    outgoing_edges(damage_type)
        .iter()
        .copied()
        .find(|edge| edge.target() == DamageType::Chaos)
}

/// Check if a node has no outgoing edges
pub fn is_terminal(damage_type: DamageType) -> bool {
    outgoing_edges(damage_type).is_empty()
}
