//! Text preview command
//!
//! Shuffles a few cards for a quick look in the terminal; nothing is written.

use crate::core::{CardBatch, GridRank, WordList};
use crate::generator::generate_for_rank;
use anyhow::{Context, Result};

/// Cards shown when no count is given
pub const DEFAULT_PREVIEW_COUNT: usize = 2;

/// Generate `count` cards for display
///
/// # Errors
///
/// Returns an error if the words don't fill the grid or the count is out of range.
pub fn run_preview(rank: GridRank, words: &WordList, count: usize) -> Result<CardBatch> {
    generate_for_rank(rank, words, count).context("Failed to generate preview cards")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{PARTY, loader::words_from_slice};

    #[test]
    fn preview_party_cards() {
        let words = words_from_slice(PARTY);
        let batch = run_preview(GridRank::square(5).unwrap(), &words, DEFAULT_PREVIEW_COUNT).unwrap();

        assert_eq!(batch.len(), 2);
        assert!(batch.cards().iter().all(|card| card.len() == 25));
    }

    #[test]
    fn preview_rejects_wrong_rank() {
        let words = words_from_slice(PARTY);
        assert!(run_preview(GridRank::square(4).unwrap(), &words, 1).is_err());
    }
}
