//! User-supplied word list
//!
//! A `WordList` holds the entries that every card in a batch is shuffled from.

use super::{BingoError, GridRank};
use rustc_hash::FxHashSet;
use std::fmt;

/// Ordered list of non-empty, trimmed entries
///
/// Entries may be single words or short phrases. Internal whitespace runs are
/// collapsed to a single space so that wrapped text always rejoins to the
/// original entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<String>,
}

/// How a word list's length compares with what a grid needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCountStatus {
    Exact,
    Missing(usize),
    Excess(usize),
}

impl WordList {
    /// Parse free text, one entry per line
    ///
    /// Lines are trimmed and blank lines dropped.
    ///
    /// # Examples
    /// ```
    /// use bingo_builder::core::WordList;
    ///
    /// let words = WordList::parse("Coffee\n\n  Remote   Work \nZoom Call\n");
    /// assert_eq!(words.as_slice(), ["Coffee", "Remote Work", "Zoom Call"]);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_entries(text.lines())
    }

    /// Build from already-split entries, applying the same normalization as [`WordList::parse`]
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let normalized = normalize(entry.as_ref());
                if normalized.is_empty() {
                    None
                } else {
                    Some(normalized)
                }
            })
            .collect();

        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Compare the list length with the cell count of `rank`
    #[must_use]
    pub fn status_for(&self, rank: GridRank) -> WordCountStatus {
        let required = rank.cell_count();
        let actual = self.entries.len();

        if actual == required {
            WordCountStatus::Exact
        } else if actual < required {
            WordCountStatus::Missing(required - actual)
        } else {
            WordCountStatus::Excess(actual - required)
        }
    }

    /// Check that the list fills `rank` exactly
    ///
    /// # Errors
    /// Returns `BingoError::InvalidWordCount` when the lengths differ.
    pub fn validate_for(&self, rank: GridRank) -> Result<(), BingoError> {
        match self.status_for(rank) {
            WordCountStatus::Exact => Ok(()),
            WordCountStatus::Missing(_) | WordCountStatus::Excess(_) => {
                Err(BingoError::InvalidWordCount {
                    expected: rank.cell_count(),
                    actual: self.entries.len(),
                })
            }
        }
    }

    /// Entries that appear more than once, in order of their second occurrence
    ///
    /// Repeats are allowed on a card; callers surface them as a warning.
    #[must_use]
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut reported: FxHashSet<&str> = FxHashSet::default();

        self.entries
            .iter()
            .map(String::as_str)
            .filter(|&entry| !seen.insert(entry) && reported.insert(entry))
            .collect()
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join("\n"))
    }
}

impl WordCountStatus {
    /// User-facing explanation of the status
    #[must_use]
    pub fn message(&self, required: usize) -> String {
        match *self {
            Self::Exact => {
                format!("Perfect! You have exactly {required} words. Ready to generate cards!")
            }
            Self::Missing(n) => format!("You need {n} more {}.", plural_word(n)),
            Self::Excess(n) => {
                format!("You have {n} too many {}. Please remove some.", plural_word(n))
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact)
    }
}

const fn plural_word(n: usize) -> &'static str {
    if n == 1 { "word" } else { "words" }
}

fn normalize(entry: &str) -> String {
    entry.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_blank_lines() {
        let words = WordList::parse("  Coffee \n\n\t\nEmail\r\n Team   Chat\n");
        assert_eq!(words.as_slice(), ["Coffee", "Email", "Team Chat"]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(WordList::parse("").is_empty());
        assert!(WordList::parse("\n  \n").is_empty());
    }

    #[test]
    fn from_entries_normalizes() {
        let words = WordList::from_entries(["a", "  ", " b  c "]);
        assert_eq!(words.as_slice(), ["a", "b c"]);
    }

    #[test]
    fn status_for_rank() {
        let rank = GridRank::square(3).unwrap();
        let words = WordList::from_entries((0..9).map(|i| format!("w{i}")));
        assert_eq!(words.status_for(rank), WordCountStatus::Exact);

        let short = WordList::from_entries((0..7).map(|i| format!("w{i}")));
        assert_eq!(short.status_for(rank), WordCountStatus::Missing(2));

        let long = WordList::from_entries((0..10).map(|i| format!("w{i}")));
        assert_eq!(long.status_for(rank), WordCountStatus::Excess(1));
    }

    #[test]
    fn validate_rejects_mismatch() {
        let rank = GridRank::square(4).unwrap();
        let words = WordList::from_entries((0..15).map(|i| format!("w{i}")));
        assert_eq!(
            words.validate_for(rank),
            Err(BingoError::InvalidWordCount {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn status_messages() {
        assert_eq!(WordCountStatus::Missing(1).message(9), "You need 1 more word.");
        assert_eq!(WordCountStatus::Missing(3).message(9), "You need 3 more words.");
        assert_eq!(
            WordCountStatus::Excess(2).message(9),
            "You have 2 too many words. Please remove some."
        );
        assert_eq!(
            WordCountStatus::Exact.message(9),
            "Perfect! You have exactly 9 words. Ready to generate cards!"
        );
    }

    #[test]
    fn duplicates_reported_once() {
        let words = WordList::parse("a\nb\na\nc\na\nb");
        assert_eq!(words.duplicates(), vec!["a", "b"]);
        assert!(WordList::parse("a\nb").duplicates().is_empty());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let words = WordList::parse("Coffee\nRemote Work");
        assert_eq!(WordList::parse(&words.to_string()), words);
    }
}
