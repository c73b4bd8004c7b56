//! DamagePath - The set of damage types a slice of damage has been

use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Set of distinct damage types, stored as bits
///
/// Passing through the same type twice does not change the set, which is
/// what makes each type's modifiers apply once per slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<DamageType>", into = "Vec<DamageType>")]
pub struct DamagePath(u8);

impl DamagePath {
    pub const fn empty() -> Self {
        DamagePath(0)
    }

    fn bit(damage_type: DamageType) -> u8 {
        1 << (damage_type as u8)
    }

    /// Copy of this path with a type added
    pub fn with(self, damage_type: DamageType) -> Self {
        DamagePath(self.0 | Self::bit(damage_type))
    }

    pub fn contains(&self, damage_type: DamageType) -> bool {
        self.0 & Self::bit(damage_type) != 0
    }

    /// Check if any Fire, Cold or Lightning is in the path
    pub fn has_elemental(&self) -> bool {
        self.iter().any(|dt| dt.is_elemental())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Types in the path, in evaluation order
    pub fn iter(self) -> impl Iterator<Item = DamageType> {
        DamageType::all()
            .iter()
            .copied()
            .filter(move |&dt| self.contains(dt))
    }
}

impl FromIterator<DamageType> for DamagePath {
    fn from_iter<I: IntoIterator<Item = DamageType>>(iter: I) -> Self {
        iter.into_iter().fold(DamagePath::empty(), DamagePath::with)
    }
}

impl From<Vec<DamageType>> for DamagePath {
    fn from(types: Vec<DamageType>) -> Self {
        types.into_iter().collect()
    }
}

impl From<DamagePath> for Vec<DamageType> {
    fn from(path: DamagePath) -> Self {
        path.iter().collect()
    }
}

impl fmt::Display for DamagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.iter().map(|dt| dt.name()).collect::<Vec<_>>();
        write!(f, "{{{}}}", names.join(", "))
    }
}
