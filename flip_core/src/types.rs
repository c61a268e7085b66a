//! Core types shared across the pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// One non-empty line of a pasted block, split on whitespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLine(pub Vec<String>);

impl TokenLine {
    pub fn new(line: &str) -> Self {
        TokenLine(line.split_whitespace().map(str::to_string).collect())
    }

    /// Exact, case-sensitive token membership
    pub fn has(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn has_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.has(t))
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// The tokens joined back together with single spaces
    pub fn text(&self) -> String {
        self.0.join(" ")
    }
}

/// Item markers found in a pasted block
///
/// The flags are independent; [`ItemClassification::kind`] decides which
/// formula is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemClassification {
    pub is_energy_shield: bool,
    pub is_body_armor: bool,
    pub is_weapon: bool,
    pub has_elemental_damage: bool,
}

impl ItemClassification {
    /// Dispatch priority: weapon, then body armour, then anything else
    pub fn kind(&self) -> ItemKind {
        if self.is_weapon {
            ItemKind::Weapon
        } else if self.is_body_armor {
            ItemKind::BodyArmor
        } else {
            ItemKind::OtherArmor
        }
    }
}

/// Formula selected for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    BodyArmor,
    OtherArmor,
}

/// Numbers pulled from armour lines: base value, then an optional increase fraction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmorStats(pub Vec<f64>);

impl ArmorStats {
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

/// Numbers pulled from weapon lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Average physical hit, then an optional increase fraction
    pub physical: Vec<f64>,
    /// Averaged elemental damage, one entry per line
    pub elemental: Vec<f64>,
    /// Attacks per second
    pub speed: Vec<f64>,
}

/// Final expected value for one pasted item
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Evaluation {
    Armor {
        kind: ItemKind,
        value: f64,
    },
    Weapon {
        physical_dps: f64,
        elemental_dps: f64,
        total_dps: f64,
    },
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Weapon {
                physical_dps,
                elemental_dps,
                total_dps,
            } => write!(
                f,
                "Expected result DPS: {:.2}  eDPS: {:.2}  pDPS: {:.2}",
                total_dps, elemental_dps, physical_dps
            ),
            Evaluation::Armor {
                kind: ItemKind::BodyArmor,
                value,
            } => write!(f, "Expected result (Chest): {:.2}", value),
            Evaluation::Armor { value, .. } => write!(f, "Expected result (Other): {:.2}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_membership_is_exact() {
        let line = TokenLine::new("Energy Shield: 120 (augmented)");
        assert!(line.has("Energy"));
        assert!(line.has("Shield:"));
        assert!(!line.has("Shield"));
        assert!(!line.has("energy"));
    }

    #[test]
    fn test_text_rejoins_with_single_spaces() {
        let line = TokenLine::new("  Physical   Damage:\t10-20 ");
        assert_eq!(line.tokens().len(), 3);
        assert_eq!(line.text(), "Physical Damage: 10-20");
    }

    #[test]
    fn test_kind_priority() {
        let all = ItemClassification {
            is_energy_shield: true,
            is_body_armor: true,
            is_weapon: true,
            has_elemental_damage: true,
        };
        assert_eq!(all.kind(), ItemKind::Weapon);

        let chest = ItemClassification {
            is_weapon: false,
            ..all
        };
        assert_eq!(chest.kind(), ItemKind::BodyArmor);

        // Energy shield alone does not pick a formula
        let es_only = ItemClassification {
            is_energy_shield: true,
            ..Default::default()
        };
        assert_eq!(es_only.kind(), ItemKind::OtherArmor);
    }

    #[test]
    fn test_display_lines() {
        let chest = Evaluation::Armor {
            kind: ItemKind::BodyArmor,
            value: 210.0,
        };
        assert_eq!(chest.to_string(), "Expected result (Chest): 210.00");

        let other = Evaluation::Armor {
            kind: ItemKind::OtherArmor,
            value: 180.5,
        };
        assert_eq!(other.to_string(), "Expected result (Other): 180.50");

        let weapon = Evaluation::Weapon {
            physical_dps: 37.8,
            elemental_dps: 0.0,
            total_dps: 37.8,
        };
        assert_eq!(
            weapon.to_string(),
            "Expected result DPS: 37.80  eDPS: 0.00  pDPS: 37.80"
        );
    }
}
