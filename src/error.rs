//! Error types for the draft evaluation harness

use thiserror::Error;

use crate::cli::types::{PlayerId, Uid};

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: Box<DraftError>,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid season table: {message}")]
    InvalidTable { message: String },

    #[error("Gold and predicted files differ in length: gold={gold}, pred={pred}")]
    LengthMismatch { gold: usize, pred: usize },

    #[error(
        "There's a mismatch between predicted and gold files at index {index}: gold_uid={gold}, pred_uid={pred}"
    )]
    UidMismatch { index: usize, gold: Uid, pred: Uid },

    #[error("Strategy {strategy} picked player {player} which is not in the draft pool of instance {uid}")]
    InvalidPick {
        uid: Uid,
        strategy: String,
        player: PlayerId,
    },

    #[error("Strategy {strategy} returned {len} players for instance {uid}, more than the roster size {max}")]
    OversizedRoster {
        uid: Uid,
        strategy: String,
        len: usize,
        max: usize,
    },

    #[error("Strategy {strategy} was asked to pick from an empty pool")]
    EmptyPool { strategy: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("No models given; pass at least one name to --models")]
    NoModels,
}

impl DraftError {
    /// Shorthand for a [`DraftError::MissingField`].
    pub fn missing(field: impl Into<String>) -> Self {
        DraftError::MissingField {
            field: field.into(),
        }
    }

    /// Attach a 1-based input line number to an error.
    pub fn at_line(self, line: usize) -> Self {
        DraftError::InvalidLine {
            line,
            source: Box::new(self),
        }
    }
}
