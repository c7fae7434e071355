//! Renderer adapters
//!
//! A [`CardSink`] turns a page plan into output bytes. Both sinks place cards
//! with the same [`SlotLayout`], so a card looks identical in the PDF and in
//! the print view.

mod export;
mod pdf;
mod print;

pub use export::{ExportError, ExportedFile, export, write_atomic};
pub use pdf::PdfSink;
pub use print::PrintSink;

use crate::config::Settings;
use crate::core::{Card, GridRank};
use crate::layout::metrics::{FontFace, FontMetrics, MM_PER_PT};
use crate::layout::{CellBox, FittedText, GridFrame, OutputMode, PageDescriptor, compute_grid_frame, fit_text};
use thiserror::Error;
use tracing::warn;

/// Gap between the bottom of the grid and the cut line, in millimetres
const CUT_LINE_GAP: f32 = 5.0;

/// Caption printed under the cut line
pub const CUT_CAPTION: &str = "Cut along this line";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Nothing to render: the card batch is empty")]
    EmptyPlan,

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Failed to build print view: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Finished output of one sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub pages: usize,
    /// Cells holding a word wider than the cell
    pub degraded_cells: usize,
}

/// A destination for a planned batch of cards
pub trait CardSink {
    /// Short human readable name, e.g. "PDF"
    fn name(&self) -> &'static str;

    /// Layout mode the sink's pages should be planned with
    fn mode(&self) -> OutputMode;

    /// Output file name for a batch of `rank` cards
    fn file_name(&self, rank: GridRank) -> String;

    /// Render `pages`, calling `on_page` with the index of each finished page
    ///
    /// # Errors
    /// Returns `RenderError` if the plan is empty or the output cannot be built.
    fn render_with_progress(
        &self,
        pages: &[PageDescriptor<'_>],
        rank: GridRank,
        on_page: &mut dyn FnMut(usize),
    ) -> Result<Rendered, RenderError>;

    /// Render `pages` in one go
    ///
    /// # Errors
    /// See [`CardSink::render_with_progress`].
    fn render(&self, pages: &[PageDescriptor<'_>], rank: GridRank) -> Result<Rendered, RenderError> {
        self.render_with_progress(pages, rank, &mut |_| {})
    }
}

/// Where one card sits on a physical page
///
/// All coordinates are page coordinates in millimetres, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    /// Top edge of the slot
    pub top: f32,
    /// Bottom edge of the slot
    pub bottom: f32,
    pub frame: GridFrame,
    pub font_size: f32,
    /// Baseline of the card title
    pub title_baseline: f32,
    pub cut_y: f32,
}

impl SlotLayout {
    /// Layout of slot `index` on a page planned with `mode`
    #[must_use]
    pub fn compute(settings: &Settings, rank: GridRank, mode: OutputMode, index: usize) -> Self {
        let (top, slot) = settings.page.slot(index, mode.cards_per_page());
        let mut frame = compute_grid_frame(&slot, rank, settings.grid_top());
        frame.y += top;

        let bottom = top + slot.height;
        let cap_height = FontMetrics::for_face(FontFace::Bold).ascent * settings.title_font_pt * MM_PER_PT;
        let title_baseline = top + slot.margin + (settings.title_band + cap_height) / 2.0;

        Self {
            top,
            bottom,
            frame,
            font_size: settings.fonts.size_for(rank),
            title_baseline,
            cut_y: (frame.bottom() + CUT_LINE_GAP).min(bottom - 1.0),
        }
    }

    /// Fit every word of `card` into its cell
    ///
    /// Cells whose word does not fit are logged and still returned.
    #[must_use]
    pub fn fit_card(&self, card: &Card, label: usize, padding: f32) -> Vec<(CellBox, FittedText)> {
        self.frame
            .cell_boxes()
            .into_iter()
            .zip(card.cells())
            .map(|(cell, word)| {
                let fitted = fit_text(word, &cell, self.font_size, padding);
                if fitted.degraded {
                    warn!(card = label, word = %word, width_mm = cell.width, "word is wider than its cell");
                }
                (cell, fitted)
            })
            .collect()
    }
}

/// Title printed above card `label`
#[must_use]
pub fn card_title(label: usize) -> String {
    format!("Bingo Card #{label}")
}

/// Default PDF file name for a batch of `rank` cards
#[must_use]
pub fn pdf_file_name(rank: GridRank) -> String {
    format!("bingo-cards-{}x{}.pdf", rank.rows(), rank.cols())
}

/// Default print view file name for a batch of `rank` cards
#[must_use]
pub fn print_file_name(rank: GridRank) -> String {
    format!("bingo-cards-{}x{}-print.html", rank.rows(), rank.cols())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(size: usize) -> GridRank {
        GridRank::square(size).unwrap()
    }

    #[test]
    fn document_slot_spans_page() {
        let settings = Settings::default();
        let slot = SlotLayout::compute(&settings, rank(3), OutputMode::Document, 0);

        assert!(slot.top.abs() < f32::EPSILON);
        assert!((slot.bottom - 297.0).abs() < 1e-3);
        assert!((slot.frame.y - 25.0).abs() < 1e-3);
        assert!(slot.title_baseline > slot.top + settings.page.margin);
        assert!(slot.title_baseline < slot.frame.y);
        assert!(slot.cut_y > slot.frame.bottom());
    }

    #[test]
    fn compact_slots_stack_vertically() {
        let settings = Settings::default();
        let upper = SlotLayout::compute(&settings, rank(4), OutputMode::Compact, 0);
        let lower = SlotLayout::compute(&settings, rank(4), OutputMode::Compact, 1);

        assert!(upper.cut_y <= upper.bottom);
        assert!(upper.bottom <= lower.frame.y);
        assert!((lower.top - 148.5).abs() < 1e-3);
        assert!(lower.frame.bottom() <= settings.page.height);
        assert!((upper.frame.cell_width - lower.frame.cell_width).abs() < 1e-3);
    }

    #[test]
    fn slot_uses_shared_font_table() {
        let settings = Settings::default();
        let slot = SlotLayout::compute(&settings, rank(5), OutputMode::Document, 0);
        assert!((slot.font_size - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fit_card_covers_every_cell() {
        let settings = Settings::default();
        let slot = SlotLayout::compute(&settings, rank(2), OutputMode::Document, 0);
        let card = Card::new(vec!["a".into(), "b b".into(), "c".into(), "d".into()]);

        let fitted = slot.fit_card(&card, 1, settings.cell_padding);
        assert_eq!(fitted.len(), 4);
        assert_eq!(fitted[1].1.joined(), "b b");
    }

    #[test]
    fn file_names_encode_rank() {
        let rank = GridRank::new(3, 5).unwrap();
        assert_eq!(pdf_file_name(rank), "bingo-cards-3x5.pdf");
        assert_eq!(print_file_name(rank), "bingo-cards-3x5-print.html");
        assert_eq!(card_title(7), "Bingo Card #7");
    }
}
