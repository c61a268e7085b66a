//! Formula constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable formula constants
///
/// These are empirical values; the armour bonuses are deliberately uneven.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaConstants {
    /// Extra increase assumed for body armours
    #[serde(default = "default_body_armor_bonus")]
    pub body_armor_bonus: f64,
    /// Extra increase assumed for other armour pieces
    #[serde(default = "default_other_armor_bonus")]
    pub other_armor_bonus: f64,
    /// Extra physical increase assumed for weapons
    #[serde(default = "default_weapon_bonus")]
    pub weapon_bonus: f64,
    /// Multiplier for global increases not visible on the item
    #[serde(default = "default_global_multiplier")]
    pub global_multiplier: f64,
}

impl Default for FormulaConstants {
    fn default() -> Self {
        FormulaConstants {
            body_armor_bonus: default_body_armor_bonus(),
            other_armor_bonus: default_other_armor_bonus(),
            weapon_bonus: default_weapon_bonus(),
            global_multiplier: default_global_multiplier(),
        }
    }
}

fn default_body_armor_bonus() -> f64 {
    0.4
}
fn default_other_armor_bonus() -> f64 {
    0.2
}
fn default_weapon_bonus() -> f64 {
    0.4
}
fn default_global_multiplier() -> f64 {
    1.2
}

/// Parse formula constants from a TOML string
pub fn parse_constants(content: &str) -> Result<FormulaConstants, ConfigError> {
    let constants: FormulaConstants = super::parse_toml(content)?;
    if constants.global_multiplier <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "global_multiplier must be positive, got {}",
            constants.global_multiplier
        )));
    }
    Ok(constants)
}

/// Get the bundled formula constants
pub fn default_constants() -> FormulaConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_constants(toml).unwrap_or_else(|e| {
        tracing::warn!("bundled constants unusable ({e}), using defaults");
        FormulaConstants::default()
    })
}
