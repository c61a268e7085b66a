//! Armour numbers: a base value and an optional increase fraction

use super::has_digit;
use crate::error::{FlipError, Result};
use crate::types::{ArmorStats, TokenLine};

/// Pull every number out of the kept armour lines, token by token
///
/// Non-digit characters are stripped from a token; a token carrying `%`
/// becomes a fraction (`"20%"` -> `0.20`).
pub fn extract_armor(lines: &[TokenLine]) -> Result<ArmorStats> {
    let mut numbers = Vec::new();

    for token in lines.iter().flat_map(|line| line.tokens()) {
        if !has_digit(token) {
            continue;
        }
        let digits: String = token.chars().filter(char::is_ascii_digit).collect();
        let value = digits
            .parse::<u64>()
            .map_err(|e| FlipError::parse(token, e))? as f64;

        if token.contains('%') {
            numbers.push(value / 100.0);
        } else {
            numbers.push(value);
        }
    }

    Ok(ArmorStats(numbers))
}
