//! Driver - one pasted block in, one expected value out
//!
//! ```text
//! watch -> tokenize -> classify -> filter -> extract -> evaluate -> print
//! ```

use crate::classify::{classify, filter_lines, tokenize};
use crate::config::FormulaConstants;
use crate::error::Result;
use crate::evaluate::{evaluate_armor, evaluate_weapon};
use crate::extract::{extract_armor, extract_weapon};
use crate::types::{ArmorStats, Evaluation, ItemClassification, ItemKind, TokenLine, WeaponStats};
use crate::watch::{SharedBuffer, WatchOutcome, Watcher};
use std::io::Write;

/// Printed between two evaluated items
pub const DIVIDER: &str =
    "----------------------------------------------------------------------------";

/// Numbers extracted for the selected formula
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Armor(ArmorStats),
    Weapon(WeaponStats),
}

/// Everything computed for one block
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub classification: ItemClassification,
    pub lines: Vec<TokenLine>,
    pub extracted: Extracted,
    pub evaluation: Evaluation,
}

/// Run the whole pipeline over one pasted block
pub fn process_block(block: &str, constants: &FormulaConstants) -> Result<Report> {
    let tokens = tokenize(block);
    let classification = classify(&tokens);
    let lines = filter_lines(&tokens, &classification);
    let kind = classification.kind();

    let (extracted, evaluation) = match kind {
        ItemKind::Weapon => {
            let stats = extract_weapon(&lines)?;
            let dps = evaluate_weapon(&stats, constants)?;
            let evaluation = Evaluation::Weapon {
                physical_dps: dps.physical,
                elemental_dps: dps.elemental,
                total_dps: dps.total,
            };
            (Extracted::Weapon(stats), evaluation)
        }
        ItemKind::BodyArmor | ItemKind::OtherArmor => {
            let stats = extract_armor(&lines)?;
            let value = evaluate_armor(&stats, kind, constants)?;
            (Extracted::Armor(stats), Evaluation::Armor { kind, value })
        }
    };

    Ok(Report {
        classification,
        lines,
        extracted,
        evaluation,
    })
}

/// Watch, evaluate and print until the watcher is interrupted
///
/// A failing cycle is reported and skipped; the block that caused it has
/// already been cleared from the buffer. Only a failure to write to `out`
/// ends the loop early.
pub fn run<B: SharedBuffer, W: Write>(
    watcher: &mut Watcher<B>,
    constants: &FormulaConstants,
    out: &mut W,
) -> Result<()> {
    loop {
        let block = match watcher.next_block() {
            Ok(WatchOutcome::Block(block)) => block,
            Ok(WatchOutcome::Interrupted) => return Ok(()),
            Err(e) => {
                tracing::error!(error = %e, "reading shared buffer failed");
                writeln!(out, "An error occurred: {e}")?;
                if watcher.is_interrupted() {
                    return Ok(());
                }
                watcher.backoff();
                continue;
            }
        };

        writeln!(out, "Extracted data block: {block}")?;

        match process_block(&block, constants) {
            Ok(report) => {
                tracing::debug!(classification = ?report.classification, "classified");
                tracing::debug!(
                    lines = ?report.lines.iter().map(TokenLine::text).collect::<Vec<_>>(),
                    "filtered"
                );
                tracing::debug!(extracted = ?report.extracted, "extracted");
                writeln!(out, "{}", report.evaluation)?;
                writeln!(out, "\n{DIVIDER}\n")?;
            }
            Err(e) => {
                tracing::error!(error = %e, "evaluation failed");
                writeln!(out, "An error occurred: {e}")?;
            }
        }
    }
}
