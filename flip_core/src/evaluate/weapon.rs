//! Weapon damage per second

use super::reapply_increase;
use crate::config::FormulaConstants;
use crate::error::{FlipError, Result};
use crate::types::WeaponStats;

/// Physical, elemental and combined damage per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponDps {
    pub physical: f64,
    pub elemental: f64,
    pub total: f64,
}

/// Expected DPS of a weapon
///
/// Elemental damage is taken as shown; physical damage goes through the
/// shared reapply step with `weapon_bonus`. Both are scaled by attack speed.
pub fn evaluate_weapon(stats: &WeaponStats, constants: &FormulaConstants) -> Result<WeaponDps> {
    let elemental_total: f64 = stats.elemental.iter().sum();
    let attack_speed = *stats.speed.first().ok_or(FlipError::MissingSpeedValue)?;
    let increase = stats.physical.get(1).copied().unwrap_or(0.0);
    let base = *stats.physical.first().ok_or(FlipError::MissingBaseValue)?;

    let elemental = elemental_total * attack_speed;
    let physical =
        reapply_increase(base, increase, constants.weapon_bonus, constants.global_multiplier) * attack_speed;

    Ok(WeaponDps {
        physical,
        elemental,
        total: physical + elemental,
    })
}
