//! Errors raised while evaluating a pasted block

use thiserror::Error;

/// Anything that can go wrong during one watch-and-evaluate cycle
#[derive(Error, Debug)]
pub enum FlipError {
    #[error("invalid number {text:?}: {source}")]
    Parse {
        text: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("malformed damage range {0:?}")]
    MalformedRange(String),
    #[error("weapon has no attacks per second value")]
    MissingSpeedValue,
    #[error("no base value was extracted")]
    MissingBaseValue,
    #[error("shared buffer unavailable: {0}")]
    Buffer(String),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl FlipError {
    pub(crate) fn parse(text: &str, source: std::num::ParseIntError) -> Self {
        FlipError::Parse {
            text: text.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlipError>;
