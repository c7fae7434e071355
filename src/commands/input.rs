//! Resolving command-line inputs into a grid rank and word list

use crate::core::{GRID_PRESETS, GridRank, WordList};
use crate::wordlists::{PRESETS, Preset, loader::load_from_file};
use anyhow::{Context, Result, anyhow, bail};
use std::path::Path;

/// Where the words for a command come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource<'a> {
    File(&'a Path),
    Preset(&'a str),
    /// The embedded preset that fills the grid
    Default,
}

impl<'a> WordSource<'a> {
    /// A file wins over a preset name; with neither, fall back to the default preset
    #[must_use]
    pub fn from_args(file: Option<&'a Path>, preset: Option<&'a str>) -> Self {
        match (file, preset) {
            (Some(path), _) => Self::File(path),
            (None, Some(name)) => Self::Preset(name),
            (None, None) => Self::Default,
        }
    }
}

/// Load words and settle the grid rank
///
/// With no explicit rank, a word count that is a perfect square picks the
/// matching square grid.
///
/// # Errors
/// Returns an error if the file cannot be read, the preset is unknown, no
/// grid can be inferred, or the words don't fill the grid.
pub fn resolve_inputs(
    rank: Option<GridRank>,
    source: WordSource<'_>,
) -> Result<(GridRank, WordList)> {
    let words = match source {
        WordSource::File(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        WordSource::Preset(name) => Preset::by_name(name)
            .ok_or_else(|| {
                let known: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
                anyhow!("Unknown preset '{name}' (available: {})", known.join(", "))
            })?
            .word_list(),
        WordSource::Default => {
            let rank = rank.unwrap_or(GRID_PRESETS[0].rank());
            Preset::for_rank(rank)
                .ok_or_else(|| {
                    anyhow!("No built-in words for a {rank} grid; pass --words or --preset")
                })?
                .word_list()
        }
    };

    let rank = match rank {
        Some(rank) => rank,
        None => infer_rank(words.len()).with_context(|| {
            format!("Cannot infer a square grid from {} words; pass --grid", words.len())
        })?,
    };

    words.validate_for(rank)?;
    Ok((rank, words))
}

/// The square grid holding exactly `word_count` words, if any
fn infer_rank(word_count: usize) -> Result<GridRank> {
    let size = (1..=word_count)
        .take_while(|n| n * n <= word_count)
        .last()
        .unwrap_or(0);
    if size * size != word_count {
        bail!("{word_count} is not a square number");
    }
    Ok(GridRank::square(size)?)
}
