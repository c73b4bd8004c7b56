//! Damage values - DamageVector and the per-type modifier set

mod modifier;
mod vector;

pub use modifier::{DamageModifier, ModifierSet};
pub use vector::DamageVector;
