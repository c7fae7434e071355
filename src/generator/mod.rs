//! Card generation
//!
//! Shuffling and batch creation. Randomness is non-cryptographic and unseeded in
//! normal use; the `_with` variants accept any `rand::Rng` for reproducible tests.

mod batch;
mod shuffle;

pub use batch::{
    MAX_CARDS, MIN_CARDS, check_card_count, clamp_card_count, generate_cards,
    generate_cards_with, generate_for_rank,
};
pub use shuffle::{shuffle, shuffle_with};
