//! Fitting cell text: font size, line wrapping, vertical centring
//!
//! Wrapping is greedy and breaks on whitespace only. A word wider than its cell
//! is kept whole on its own line and the result is flagged as degraded; words
//! are never hyphenated, truncated or ellipsised.

use super::geometry::CellBox;
use super::metrics::{FontFace, FontMetrics, MM_PER_PT};
use crate::core::GridRank;
use serde::{Deserialize, Serialize};

/// Horizontal padding between a cell border and its text, in millimetres
pub const DEFAULT_CELL_PADDING: f32 = 2.0;

/// Baseline-to-baseline distance as a multiple of the font size
pub const LINE_SPACING: f32 = 1.2;

/// One row of the font-size table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontBreakpoint {
    /// Applies to ranks whose larger dimension is at most this
    pub max_dimension: usize,
    pub size_pt: f32,
}

/// Ordered rank breakpoints mapping grid size to cell font size
///
/// Shared by every renderer so PDF and print output use identical sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizeTable {
    pub breakpoints: Vec<FontBreakpoint>,
    /// Used for ranks larger than every breakpoint
    pub fallback_pt: f32,
}

impl Default for FontSizeTable {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                FontBreakpoint {
                    max_dimension: 3,
                    size_pt: 11.0,
                },
                FontBreakpoint {
                    max_dimension: 4,
                    size_pt: 9.0,
                },
            ],
            fallback_pt: 7.0,
        }
    }
}

impl FontSizeTable {
    /// Cell font size for `rank`
    ///
    /// Picks the tightest breakpoint that still covers the rank, regardless of
    /// the order the breakpoints were written in.
    ///
    /// # Examples
    /// ```
    /// use bingo_builder::core::GridRank;
    /// use bingo_builder::layout::FontSizeTable;
    ///
    /// let table = FontSizeTable::default();
    /// assert_eq!(table.size_for(GridRank::square(3).unwrap()), 11.0);
    /// assert_eq!(table.size_for(GridRank::square(4).unwrap()), 9.0);
    /// assert_eq!(table.size_for(GridRank::square(7).unwrap()), 7.0);
    /// ```
    #[must_use]
    pub fn size_for(&self, rank: GridRank) -> f32 {
        let dimension = rank.max_dimension();
        self.breakpoints
            .iter()
            .filter(|bp| dimension <= bp.max_dimension)
            .min_by_key(|bp| bp.max_dimension)
            .map_or(self.fallback_pt, |bp| bp.size_pt)
    }
}

/// Wrapped, measured text for one cell
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub lines: Vec<String>,
    /// Width of each line in millimetres
    pub line_widths: Vec<f32>,
    pub font_size: f32,
    /// Baseline-to-baseline distance in millimetres
    pub line_height: f32,
    /// Distance from the cell top to the top of the text block
    pub offset_y: f32,
    /// Some line is wider than the usable cell width
    pub degraded: bool,
}

impl FittedText {
    /// Distance from the cell top to the baseline of line `index`
    #[must_use]
    pub fn baseline(&self, index: usize) -> f32 {
        let ascent = FontMetrics::for_face(FontFace::Regular).ascent * self.font_size * MM_PER_PT;
        self.offset_y + self.line_height * index as f32 + ascent
    }

    /// Height of the whole text block in millimetres
    #[must_use]
    pub fn block_height(&self) -> f32 {
        self.line_height * self.lines.len() as f32
    }

    /// The lines joined back with single spaces
    #[must_use]
    pub fn joined(&self) -> String {
        self.lines.join(" ")
    }
}

/// Wrap and vertically centre `text` inside `cell` at `font_size` points
///
/// # Examples
/// ```
/// use bingo_builder::layout::{CellBox, fit_text};
///
/// let cell = CellBox { x: 0.0, y: 0.0, width: 20.0, height: 20.0 };
/// let fitted = fit_text("Team Chat Channel", &cell, 11.0, 2.0);
/// assert!(fitted.lines.len() > 1);
/// assert_eq!(fitted.joined(), "Team Chat Channel");
/// ```
#[must_use]
pub fn fit_text(text: &str, cell: &CellBox, font_size: f32, padding: f32) -> FittedText {
    let metrics = FontMetrics::for_face(FontFace::Regular);
    let max_width = (cell.width - 2.0 * padding).max(0.0);

    let lines = wrap_with(
        text,
        max_width,
        |s| metrics.measure_mm(s, font_size),
        metrics.space_mm(font_size),
    );
    let line_widths: Vec<f32> = lines
        .iter()
        .map(|line| metrics.measure_mm(line, font_size))
        .collect();
    let degraded = line_widths.iter().any(|&w| w > max_width);

    let line_height = font_size * MM_PER_PT * LINE_SPACING;
    let block_height = line_height * lines.len() as f32;

    FittedText {
        lines,
        line_widths,
        font_size,
        line_height,
        offset_y: (cell.height - block_height) / 2.0,
        degraded,
    }
}

/// Greedy whitespace wrapping against an arbitrary width measure
///
/// `measure` returns the width of a run of text; `space_width` is the cost of
/// the space re-inserted between two words on the same line. Every word is kept
/// whole, so the output rejoined with single spaces equals the input's words
/// joined with single spaces.
pub fn wrap_with<F>(text: &str, max_width: f32, measure: F, space_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = measure(word);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(width: f32, height: f32) -> CellBox {
        CellBox {
            x: 15.0,
            y: 25.0,
            width,
            height,
        }
    }

    #[test]
    fn short_word_fits_on_one_line() {
        let fitted = fit_text("Coffee", &cell(60.0, 60.0), 11.0, DEFAULT_CELL_PADDING);
        assert_eq!(fitted.lines, vec!["Coffee"]);
        assert!(!fitted.degraded);
    }

    #[test]
    fn long_phrase_wraps_and_rejoins() {
        let phrases = [
            "Someone forgets to unmute before talking",
            "Remote Work",
            "Coffee",
            "a b c d e f g h i j k l m n o p",
        ];
        for phrase in phrases {
            let fitted = fit_text(phrase, &cell(25.0, 25.0), 9.0, DEFAULT_CELL_PADDING);
            assert_eq!(fitted.joined(), phrase);
            assert!(!fitted.lines.iter().any(String::is_empty));
        }
    }

    #[test]
    fn lines_respect_cell_width() {
        let fitted = fit_text(
            "Someone forgets to unmute before talking",
            &cell(36.0, 36.0),
            7.0,
            DEFAULT_CELL_PADDING,
        );
        assert!(fitted.lines.len() > 1);
        assert!(!fitted.degraded);
        assert!(fitted.line_widths.iter().all(|&w| w <= 32.0));
    }

    #[test]
    fn overwide_word_overflows_but_is_kept() {
        let word = "Supercalifragilisticexpialidocious";
        let fitted = fit_text(word, &cell(20.0, 20.0), 11.0, DEFAULT_CELL_PADDING);
        assert_eq!(fitted.lines, vec![word]);
        assert!(fitted.degraded);
    }

    #[test]
    fn text_block_is_vertically_centred() {
        let c = cell(30.0, 40.0);
        let fitted = fit_text("Zoom Call Again Today", &c, 11.0, DEFAULT_CELL_PADDING);
        let below = c.height - fitted.offset_y - fitted.block_height();
        assert!((fitted.offset_y - below).abs() < 1e-3);
        assert!(fitted.baseline(0) > fitted.offset_y);
        assert!(fitted.baseline(1) > fitted.baseline(0) || fitted.lines.len() == 1);
    }

    #[test]
    fn font_table_breakpoints() {
        let table = FontSizeTable::default();
        let size = |r: usize, c: usize| table.size_for(GridRank::new(r, c).unwrap());
        assert!((size(2, 2) - 11.0).abs() < f32::EPSILON);
        assert!((size(3, 3) - 11.0).abs() < f32::EPSILON);
        assert!((size(3, 4) - 9.0).abs() < f32::EPSILON);
        assert!((size(5, 5) - 7.0).abs() < f32::EPSILON);
        assert!((size(8, 2) - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn font_table_order_does_not_matter() {
        let mut table = FontSizeTable::default();
        table.breakpoints.reverse();
        assert!((table.size_for(GridRank::square(3).unwrap()) - 11.0).abs() < f32::EPSILON);
        assert!((table.size_for(GridRank::square(4).unwrap()) - 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn wrap_with_character_measure() {
        let lines = wrap_with("Remote Work Zoom Call", 11.0, |s| s.chars().count() as f32, 1.0);
        assert_eq!(lines, vec!["Remote Work", "Zoom Call"]);
    }

    #[test]
    fn wrap_zero_width_puts_each_word_alone() {
        let lines = wrap_with("a b c", 0.0, |s| s.len() as f32, 1.0);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn wrap_empty_text() {
        assert!(wrap_with("   ", 10.0, |s| s.len() as f32, 1.0).is_empty());
    }
}
