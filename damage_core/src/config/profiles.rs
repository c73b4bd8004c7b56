//! Damage profile configuration loading

use super::ConfigError;
use crate::conversion::ConversionTable;
use crate::damage::{DamageVector, ModifierSet};
use crate::profile::CharacterDamageProfile;
use crate::types::{DamageType, ModifierType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Which modifier layer an entry adds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Added,
    Increased,
    More,
}

/// A single modifier from one source, e.g. "30% more Physical Damage"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierEntry {
    pub target: ModifierType,
    pub kind: ModifierKind,
    /// Flat damage for `added`, decimal percentage otherwise (0.30 = 30%)
    pub value: f64,
}

/// A named damage profile as written in config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Unique profile identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub base_damage: DamageVector,

    /// Applied in order through the ModifierSet builders
    #[serde(default)]
    pub modifiers: Vec<ModifierEntry>,

    #[serde(default)]
    pub skill_conversions: ConversionTable,
    #[serde(default)]
    pub gear_conversions: ConversionTable,
    #[serde(default)]
    pub extra_damage_as: ConversionTable,

    #[serde(default)]
    pub non_chaos_as_extra_chaos: f64,
    #[serde(default)]
    pub elemental_as_extra_chaos: f64,
}

impl ProfileConfig {
    /// Validate and build the engine input
    pub fn into_profile(self) -> Result<CharacterDamageProfile, ConfigError> {
        self.validate()?;

        let mut modifiers = ModifierSet::default();
        for entry in &self.modifiers {
            modifiers = match entry.kind {
                // Flat damage needs a concrete type to be dealt as
                ModifierKind::Added => {
                    modifiers.with_added(entry.value, DamageType::try_from(entry.target)?)
                }
                ModifierKind::Increased => modifiers.with_increased(entry.value, entry.target),
                ModifierKind::More => modifiers.with_more(entry.value, entry.target),
            };
        }

        Ok(CharacterDamageProfile::new(self.base_damage)
            .with_modifiers(modifiers)
            .with_skill_conversions(self.skill_conversions)
            .with_gear_conversions(self.gear_conversions)
            .with_extra_damage_as(self.extra_damage_as)
            .with_non_chaos_as_extra_chaos(self.non_chaos_as_extra_chaos)
            .with_elemental_as_extra_chaos(self.elemental_as_extra_chaos))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: String| -> Result<(), ConfigError> {
            Err(ConfigError::ValidationError(format!(
                "profile '{}': {}",
                self.id, msg
            )))
        };

        for (dt, amount) in self.base_damage.iter() {
            if amount < 0.0 {
                return fail(format!("negative base {} damage {}", dt, amount));
            }
        }

        for (label, table) in [
            ("skill_conversions", &self.skill_conversions),
            ("gear_conversions", &self.gear_conversions),
            ("extra_damage_as", &self.extra_damage_as),
        ] {
            if let Some((edge, value)) = table.negative_edges().next() {
                return fail(format!("negative {} {:?} = {}", label, edge, value));
            }
        }

        if self.non_chaos_as_extra_chaos < 0.0 || self.elemental_as_extra_chaos < 0.0 {
            return fail("extra chaos fractions must not be negative".to_string());
        }

        for entry in &self.modifiers {
            match entry.kind {
                ModifierKind::Added if entry.value < 0.0 => {
                    return fail(format!(
                        "negative added {:?} damage {}",
                        entry.target, entry.value
                    ));
                }
                ModifierKind::More if entry.value <= -1.0 => {
                    return fail(format!(
                        "more {:?} of {} leaves no damage",
                        entry.target, entry.value
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Container for profile configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    #[serde(rename = "profiles")]
    pub profiles: Vec<ProfileConfig>,
}

impl ProfilesConfig {
    fn into_profiles(self) -> Result<HashMap<String, CharacterDamageProfile>, ConfigError> {
        let mut map = HashMap::new();
        for config in self.profiles {
            let id = config.id.clone();
            if map.contains_key(&id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate profile id '{}'",
                    id
                )));
            }
            map.insert(id, config.into_profile()?);
        }
        tracing::debug!("loaded {} damage profiles", map.len());
        Ok(map)
    }
}

/// Load profile configurations from a TOML file
pub fn load_profile_configs(
    path: &Path,
) -> Result<HashMap<String, CharacterDamageProfile>, ConfigError> {
    let config: ProfilesConfig = super::load_toml(path)?;
    config.into_profiles()
}

/// Load profile configurations from a TOML string
pub fn parse_profile_configs(
    content: &str,
) -> Result<HashMap<String, CharacterDamageProfile>, ConfigError> {
    let config: ProfilesConfig = super::parse_toml(content)?;
    config.into_profiles()
}

/// Load a single profile from a JSON string
pub fn parse_profile_json(content: &str) -> Result<CharacterDamageProfile, ConfigError> {
    let config: ProfileConfig = super::parse_json(content)?;
    config.into_profile()
}

/// Get the bundled reference profiles
pub fn default_profiles() -> HashMap<String, CharacterDamageProfile> {
    let toml = include_str!("../../config/profiles.toml");
    parse_profile_configs(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled damage profiles failed to load: {}", err);
        HashMap::new()
    })
}
