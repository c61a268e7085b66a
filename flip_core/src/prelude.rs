//! Prelude module for convenient imports
//!
//! ```rust
//! use flip_core::prelude::*;
//! ```

// Pipeline
pub use crate::classify::{classify, filter_lines, tokenize};
pub use crate::driver::{process_block, run, Report};
pub use crate::extract::{extract_armor, extract_weapon};
pub use crate::evaluate::{evaluate_armor, evaluate_weapon};

// Core types
pub use crate::types::{ArmorStats, Evaluation, ItemClassification, ItemKind, TokenLine, WeaponStats};
pub use crate::error::{FlipError, Result};

// Watching
pub use crate::watch::{SharedBuffer, WatchOutcome, Watcher};

// Config
pub use crate::config::{default_constants, FormulaConstants};
