//! Weapon numbers: physical damage, elemental damage, attack speed
//!
//! Keywords and numbers sit in different tokens ("Physical Damage: 10-20"),
//! so every check here runs against the whole line.

use super::has_digit;
use crate::error::{FlipError, Result};
use crate::types::{TokenLine, WeaponStats};
use regex::Regex;
use std::sync::LazyLock;

static RE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)-(\d+)").expect("range pattern is valid"));

const ELEMENTS: [&str; 3] = ["Fire", "Cold", "Lightning"];

/// Sort the numbers of each kept weapon line into damage and speed buckets
pub fn extract_weapon(lines: &[TokenLine]) -> Result<WeaponStats> {
    let mut stats = WeaponStats::default();

    for line in lines {
        let text = line.text();
        if !has_digit(&text) {
            continue;
        }

        if text.contains("Elemental") && text.contains('-') {
            stats.elemental.push(sum_of_range_averages(&text)?);
            continue;
        }

        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();

        if text.contains('%') {
            if text.contains("Physical") {
                stats.physical.push(parse_int(&cleaned)? as f64 / 100.0);
            }
        } else if text.contains('-') {
            let mean = range_average(&cleaned)?;
            if text.contains("Damage") && text.contains("Physical") {
                stats.physical.push(mean);
            } else if text.contains("Damage") && ELEMENTS.iter().any(|e| text.contains(e)) {
                stats.elemental.push(mean);
            }
        } else if text.contains("Second:") {
            stats.speed.push(parse_int(&cleaned)? as f64 / 100.0);
        }
    }

    tracing::trace!(?stats, "weapon extraction");
    Ok(stats)
}

/// "Elemental Damage: 4-8, 10-20" -> 6 + 15
fn sum_of_range_averages(text: &str) -> Result<f64> {
    let mut total = 0.0;
    for caps in RE_RANGE.captures_iter(text) {
        let start = parse_int(&caps[1])?;
        let end = parse_int(&caps[2])?;
        total += average(start, end);
    }
    Ok(total)
}

/// Average of a cleaned "start-end" pair; anything other than two parts is malformed
fn range_average(cleaned: &str) -> Result<f64> {
    let mut parts = cleaned.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => {
            let start = parse_int(start)?;
            let end = parse_int(end)?;
            Ok(average(start, end))
        }
        _ => Err(FlipError::MalformedRange(cleaned.to_string())),
    }
}

// Summed in f64 so that huge values cannot overflow
fn average(start: i64, end: i64) -> f64 {
    (start as f64 + end as f64) / 2.0
}

fn parse_int(s: &str) -> Result<i64> {
    s.parse::<i64>().map_err(|e| FlipError::parse(s, e))
}
