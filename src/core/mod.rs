//! Core domain types for bingo cards
//!
//! Grid ranks, word lists, cards and the errors raised when they don't fit together.
//! Nothing here touches randomness or rendering.

mod card;
mod error;
mod rank;
mod words;

pub use card::{Card, CardBatch};
pub use error::BingoError;
pub use rank::{GRID_PRESETS, GridPreset, GridRank, MIN_DIMENSION};
pub use words::{WordCountStatus, WordList};
