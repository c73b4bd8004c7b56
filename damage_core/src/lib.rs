//! damage_core - Damage conversion and scaling engine
//!
//! This library provides:
//! - CharacterDamageProfile: Base damage plus every conversion and modifier input
//! - ConversionEngine: Walks damage down the conversion topology
//! - ModifierAggregator: Applies each type's Increased/More once per slice
//! - DamageBreakdown: Every finalized slice behind a result
//! - Config: Loading profiles from TOML/JSON

pub mod config;
pub mod conversion;
pub mod damage;
pub mod engine;
pub mod prelude;
pub mod profile;
pub mod types;

// Re-export core types for convenience
pub use config::{default_profiles, ConfigError};
pub use conversion::{ConversionEdge, ConversionTable};
pub use damage::{DamageModifier, DamageVector, ModifierSet};
pub use engine::{
    calculate_damage, calculate_damage_breakdown, DamageBreakdown, DamageContribution, DamagePath,
};
pub use profile::CharacterDamageProfile;
pub use types::{DamageError, DamageType, ModifierType};
