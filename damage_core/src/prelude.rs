//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DamageError, DamageType, ModifierType};
pub use crate::damage::{DamageModifier, DamageVector, ModifierSet};
pub use crate::profile::CharacterDamageProfile;

// Conversion
pub use crate::conversion::{ConversionEdge, ConversionTable};

// Engine
pub use crate::engine::{calculate_damage, calculate_damage_breakdown, DamageBreakdown};

// Config
pub use crate::config::{default_profiles, ConfigError};
