//! Input and precondition errors for card generation

use thiserror::Error;

/// Errors raised before any card is produced
///
/// None of these leave partial state behind: a rejected request produces no batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BingoError {
    /// Grid dimensions below the 2x2 minimum
    #[error("Grid must be at least 2x2, got {rows}x{cols}")]
    InvalidRank { rows: usize, cols: usize },

    /// Text that does not describe a grid rank
    #[error("Cannot parse grid rank from '{0}' (expected e.g. '4x4' or '4')")]
    UnparsableRank(String),

    /// Word list length differs from the rank's cell count
    #[error("Grid needs exactly {expected} words, got {actual}")]
    InvalidWordCount { expected: usize, actual: usize },

    /// Generation attempted with no words at all
    #[error("Cannot generate cards from an empty word list")]
    EmptyWordList,

    /// Requested number of cards outside the supported range
    #[error("Card count must be between {min} and {max}, got {requested}")]
    InvalidCardCount {
        requested: usize,
        min: usize,
        max: usize,
    },
}
