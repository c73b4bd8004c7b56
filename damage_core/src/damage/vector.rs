//! DamageVector - Damage split across the five damage types

use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Damage amounts per type
///
/// A plain value: every operation returns a new vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageVector {
    #[serde(default)]
    pub physical: f64,
    #[serde(default)]
    pub fire: f64,
    #[serde(default)]
    pub cold: f64,
    #[serde(default)]
    pub lightning: f64,
    #[serde(default)]
    pub chaos: f64,
}

impl DamageVector {
    pub const EMPTY: DamageVector = DamageVector {
        physical: 0.0,
        fire: 0.0,
        cold: 0.0,
        lightning: 0.0,
        chaos: 0.0,
    };

    pub fn new(physical: f64, fire: f64, cold: f64, lightning: f64, chaos: f64) -> Self {
        DamageVector {
            physical,
            fire,
            cold,
            lightning,
            chaos,
        }
    }

    /// A vector holding `amount` of a single type
    pub fn of_type(damage_type: DamageType, amount: f64) -> Self {
        Self::EMPTY.with(damage_type, amount)
    }

    /// Get total damage (sum of all types)
    pub fn total(&self) -> f64 {
        self.physical + self.fire + self.cold + self.lightning + self.chaos
    }

    /// Get damage for a specific type
    pub fn get(&self, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Physical => self.physical,
            DamageType::Fire => self.fire,
            DamageType::Cold => self.cold,
            DamageType::Lightning => self.lightning,
            DamageType::Chaos => self.chaos,
        }
    }

    /// Copy of this vector with one type replaced
    pub fn with(self, damage_type: DamageType, amount: f64) -> Self {
        match damage_type {
            DamageType::Physical => DamageVector { physical: amount, ..self },
            DamageType::Fire => DamageVector { fire: amount, ..self },
            DamageType::Cold => DamageVector { cold: amount, ..self },
            DamageType::Lightning => DamageVector { lightning: amount, ..self },
            DamageType::Chaos => DamageVector { chaos: amount, ..self },
        }
    }

    /// Non-zero (type, amount) pairs in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        DamageType::all()
            .iter()
            .map(move |&dt| (dt, self.get(dt)))
            .filter(|(_, amount)| *amount != 0.0)
    }
}

impl Add for DamageVector {
    type Output = DamageVector;

    fn add(self, other: DamageVector) -> DamageVector {
        DamageVector {
            physical: self.physical + other.physical,
            fire: self.fire + other.fire,
            cold: self.cold + other.cold,
            lightning: self.lightning + other.lightning,
            chaos: self.chaos + other.chaos,
        }
    }
}

impl AddAssign for DamageVector {
    fn add_assign(&mut self, other: DamageVector) {
        *self = *self + other;
    }
}

impl Sum for DamageVector {
    fn sum<I: Iterator<Item = DamageVector>>(iter: I) -> Self {
        iter.fold(DamageVector::EMPTY, Add::add)
    }
}

impl fmt::Display for DamageVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .iter()
            .map(|(dt, amount)| format!("{}: {:.1}", dt, amount))
            .collect::<Vec<_>>();
        if parts.is_empty() {
            write!(f, "no damage")
        } else {
            write!(f, "{} (total {:.1})", parts.join(", "), self.total())
        }
    }
}
