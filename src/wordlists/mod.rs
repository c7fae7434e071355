//! Sample word lists
//!
//! Presets compiled into the binary, one for each standard grid size.

mod embedded;
pub mod loader;

pub use embedded::{CLASSROOM, OFFICE, PARTY};

use crate::core::{GridRank, WordList};

/// A named sample word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

/// All embedded presets, smallest first
pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "office",
        words: OFFICE,
    },
    Preset {
        name: "classroom",
        words: CLASSROOM,
    },
    Preset {
        name: "party",
        words: PARTY,
    },
];

impl Preset {
    /// Find a preset by name (case-insensitive)
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        PRESETS
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Find the preset that exactly fills a `rank` card
    #[must_use]
    pub fn for_rank(rank: GridRank) -> Option<Self> {
        PRESETS
            .into_iter()
            .find(|preset| preset.words.len() == rank.cell_count())
    }

    #[must_use]
    pub fn word_list(&self) -> WordList {
        loader::words_from_slice(self.words)
    }
}
