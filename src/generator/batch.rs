//! Card set generation
//!
//! Every card is an independent shuffle of the same word list. Nothing stops two
//! cards in a batch from coming out identical.

use super::shuffle::shuffle_with;
use crate::core::{BingoError, Card, CardBatch, GridRank, WordList};
use rand::Rng;
use tracing::debug;

/// Fewest cards a single request may produce
pub const MIN_CARDS: usize = 1;

/// Most cards a single request may produce
pub const MAX_CARDS: usize = 100;

/// Generate `count` independently shuffled cards from `words`
///
/// The generator does not know about grid ranks; use [`generate_for_rank`]
/// when the word count still needs checking.
///
/// # Errors
/// - `BingoError::EmptyWordList` if `words` is empty
/// - `BingoError::InvalidCardCount` if `count` is outside `1..=100`
///
/// # Examples
/// ```
/// use bingo_builder::generator::generate_cards;
///
/// let words: Vec<String> = ["a", "b", "c", "d"].iter().map(ToString::to_string).collect();
/// let batch = generate_cards(&words, 3).unwrap();
/// assert_eq!(batch.len(), 3);
/// assert!(batch.cards().iter().all(|card| card.len() == 4));
/// ```
pub fn generate_cards(words: &[String], count: usize) -> Result<CardBatch, BingoError> {
    generate_cards_with(words, count, &mut rand::rng())
}

/// Same as [`generate_cards`], drawing from a caller-supplied generator
///
/// # Errors
/// See [`generate_cards`].
pub fn generate_cards_with<R: Rng>(
    words: &[String],
    count: usize,
    rng: &mut R,
) -> Result<CardBatch, BingoError> {
    if words.is_empty() {
        return Err(BingoError::EmptyWordList);
    }
    check_card_count(count)?;

    let cards = (0..count)
        .map(|_| Card::new(shuffle_with(words, rng)))
        .collect();

    debug!(cards = count, words = words.len(), "generated card batch");
    Ok(CardBatch::new(cards))
}

/// Generate cards for `rank`, rejecting word lists that don't fill it exactly
///
/// # Errors
/// - `BingoError::InvalidWordCount` if `words.len() != rank.cell_count()`
/// - anything [`generate_cards`] returns
pub fn generate_for_rank(
    rank: GridRank,
    words: &WordList,
    count: usize,
) -> Result<CardBatch, BingoError> {
    words.validate_for(rank)?;
    generate_cards(words.as_slice(), count)
}

/// Check `count` against the supported range
///
/// # Errors
/// Returns `BingoError::InvalidCardCount` when out of range.
pub const fn check_card_count(count: usize) -> Result<(), BingoError> {
    if count < MIN_CARDS || count > MAX_CARDS {
        return Err(BingoError::InvalidCardCount {
            requested: count,
            min: MIN_CARDS,
            max: MAX_CARDS,
        });
    }
    Ok(())
}

/// Clamp a requested count into the supported range
#[must_use]
pub fn clamp_card_count(count: usize) -> usize {
    count.clamp(MIN_CARDS, MAX_CARDS)
}
