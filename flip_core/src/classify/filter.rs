//! Type-specific line filtering
//!
//! Only the lines that feed a formula survive. Branch priority here is
//! energy shield, then weapon, then evasion, which is not the same order
//! as formula dispatch.

use crate::types::{ItemClassification, TokenLine};

/// Keep the lines relevant to the item's formula, in their original order
pub fn filter_lines(lines: &[TokenLine], classification: &ItemClassification) -> Vec<TokenLine> {
    let keep: fn(&TokenLine, &ItemClassification) -> bool = if classification.is_energy_shield {
        keep_energy_shield
    } else if classification.is_weapon {
        keep_weapon
    } else {
        keep_evasion
    };

    lines
        .iter()
        .filter(|line| keep(line, classification))
        .cloned()
        .collect()
}

/// Shield lines, minus recharge and "maximum" modifiers
fn keep_energy_shield(line: &TokenLine, _: &ItemClassification) -> bool {
    let shield = (line.has("Energy") && line.has("Shield")) || line.has("Shield:");
    shield && !line.has("Recharge") && !line.has("maximum")
}

/// Damage lines, attack speed, and "increased" modifiers that are not flat adds
///
/// Without any elemental marker only physical damage lines pass. The
/// "Attacks" clause is not subject to the "Adds" exclusion.
fn keep_weapon(line: &TokenLine, classification: &ItemClassification) -> bool {
    let damage = if classification.has_elemental_damage {
        line.has("Damage:")
    } else {
        line.has("Damage:") && line.has("Physical")
    };
    damage || line.has("Attacks") || (line.has("increased") && !line.has("Adds"))
}

/// Flat evasion lines; "+X to Evasion Rating" style modifiers are dropped
fn keep_evasion(line: &TokenLine, _: &ItemClassification) -> bool {
    line.has("Evasion") && !line.has("to")
}
