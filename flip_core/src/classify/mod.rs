//! Tokenizing and classifying a pasted item block
//!
//! Classification is plain token matching against the trade site's text.
//! Markers are exact and case-sensitive, and a single line may raise
//! several of them.

mod filter;

pub use filter::filter_lines;

use crate::types::{ItemClassification, TokenLine};

/// Tokens that mark elemental damage anywhere in the block
pub const ELEMENTAL_MARKERS: [&str; 4] = ["Fire", "Cold", "Lightning", "Elemental"];

/// Split a block into trimmed, non-empty lines of whitespace tokens
pub fn tokenize(block: &str) -> Vec<TokenLine> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(TokenLine::new)
        .collect()
}

/// Scan every line for the item markers
pub fn classify(lines: &[TokenLine]) -> ItemClassification {
    ItemClassification {
        is_energy_shield: lines.iter().any(|l| l.has("Energy")),
        is_body_armor: lines.iter().any(|l| l.has("Body")),
        is_weapon: lines.iter().any(|l| l.has("Damage:")),
        has_elemental_damage: lines.iter().any(|l| l.has_any(&ELEMENTAL_MARKERS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_blank_lines() {
        let lines = tokenize("Item Class: Gloves\n\n   \r\nEvasion Rating: 150\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].tokens(), ["Item", "Class:", "Gloves"]);
        assert_eq!(lines[1].text(), "Evasion Rating: 150");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n").is_empty());
    }

    #[test]
    fn test_classify_energy_shield_chest() {
        let lines = tokenize(
            "Item Class: Body Armours\nEnergy Shield: 210 (augmented)\n+30 to maximum Energy Shield",
        );
        let c = classify(&lines);
        assert!(c.is_energy_shield);
        assert!(c.is_body_armor);
        assert!(!c.is_weapon);
        assert!(!c.has_elemental_damage);
    }

    #[test]
    fn test_classify_weapon() {
        let lines = tokenize(
            "Item Class: One Hand Maces\nPhysical Damage: 10-20\nElemental Damage: 3-6\nAttacks per Second: 1.45",
        );
        let c = classify(&lines);
        assert!(c.is_weapon);
        assert!(c.has_elemental_damage);
    }

    #[test]
    fn test_classify_is_exact_token() {
        // "Damage" without the colon and lowercase markers do not count
        let lines = tokenize("Adds 5 to 10 physical Damage\nfire resistance");
        let c = classify(&lines);
        assert!(!c.is_weapon);
        assert!(!c.has_elemental_damage);
        assert_eq!(c, ItemClassification::default());
    }

    #[test]
    fn test_one_line_raises_many_markers() {
        let lines = tokenize("Body Energy Damage: Cold");
        let c = classify(&lines);
        assert!(c.is_energy_shield && c.is_body_armor && c.is_weapon && c.has_elemental_damage);
    }
}
