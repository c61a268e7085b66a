//! flip_core - Item stat evaluation for copied trade text
//!
//! This library provides:
//! - Tokenizing and classifying a pasted item block
//! - Type-specific line filtering and numeric extraction
//! - Expected-value formulas for armour pieces and weapons
//! - A clipboard watcher and the driver loop tying it all together

pub mod classify;
pub mod config;
pub mod driver;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod prelude;
pub mod types;
pub mod watch;

// Re-export core types for convenience
pub use classify::{classify, filter_lines, tokenize};
pub use config::{default_constants, FormulaConstants};
pub use driver::{process_block, run, Report, DIVIDER};
pub use error::{FlipError, Result};
pub use evaluate::{evaluate_armor, evaluate_weapon, WeaponDps};
pub use extract::{extract_armor, extract_weapon};
pub use types::{ArmorStats, Evaluation, ItemClassification, ItemKind, TokenLine, WeaponStats};
pub use watch::{MemoryBuffer, SharedBuffer, WatchOutcome, Watcher};
