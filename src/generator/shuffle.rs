//! Fisher–Yates shuffling

use rand::Rng;

/// Return a shuffled copy of `items` using the thread-local generator
///
/// The input is left untouched.
///
/// # Examples
/// ```
/// use bingo_builder::generator::shuffle;
///
/// let words = vec!["a", "b", "c", "d"];
/// let mut shuffled = shuffle(&words);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, words);
/// ```
#[must_use]
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Return a shuffled copy of `items` drawing from `rng`
///
/// Iterates `i` from `n - 1` down to `1`, picks `j` uniformly in `[0, i]`
/// and swaps, so every permutation is equally likely.
#[must_use]
pub fn shuffle_with<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}
