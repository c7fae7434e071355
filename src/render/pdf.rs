//! PDF document sink

use super::{CUT_CAPTION, CardSink, RenderError, Rendered, SlotLayout, card_title, pdf_file_name};
use crate::config::Settings;
use crate::core::{Card, GridRank};
use crate::layout::metrics::{FontFace, FontMetrics};
use crate::layout::{OutputMode, PageDescriptor};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, LineDashPattern, Mm, PdfDocument, PdfLayerReference, Point,
};
use tracing::debug;

/// Border thickness in points
const BORDER_PT: f32 = 0.75;

/// Renders cards into a multi-page PDF with the built-in Helvetica faces
#[derive(Debug, Clone)]
pub struct PdfSink {
    settings: Settings,
    mode: OutputMode,
}

impl PdfSink {
    /// One card per page
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_mode(settings, OutputMode::Document)
    }

    #[must_use]
    pub const fn with_mode(settings: Settings, mode: OutputMode) -> Self {
        Self { settings, mode }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Drawing helper that flips top-left millimetre coordinates into PDF space
struct Canvas<'a> {
    layer: PdfLayerReference,
    fonts: &'a Fonts,
    page_height: f32,
}

impl Canvas<'_> {
    fn point(&self, x: f32, y: f32) -> (Point, bool) {
        (Point::new(Mm(x), Mm(self.page_height - y)), false)
    }

    fn rect(&self, x: f32, y: f32, width: f32, height: f32) {
        self.layer.add_line(Line {
            points: vec![
                self.point(x, y),
                self.point(x + width, y),
                self.point(x + width, y + height),
                self.point(x, y + height),
            ],
            is_closed: true,
        });
    }

    fn dashed_line(&self, x1: f32, x2: f32, y: f32) {
        self.layer.set_line_dash_pattern(LineDashPattern {
            dash_1: Some(3),
            gap_1: Some(2),
            ..LineDashPattern::default()
        });
        self.layer.add_line(Line {
            points: vec![self.point(x1, y), self.point(x2, y)],
            is_closed: false,
        });
        self.layer.set_line_dash_pattern(LineDashPattern::default());
    }

    /// Text whose baseline starts at (`x`, `baseline`)
    fn text(&self, text: &str, size_pt: f32, x: f32, baseline: f32, face: FontFace) {
        let font = match face {
            FontFace::Regular => &self.fonts.regular,
            FontFace::Bold => &self.fonts.bold,
        };
        self.layer
            .use_text(text, size_pt, Mm(x), Mm(self.page_height - baseline), font);
    }

    /// Text horizontally centred on `center_x`
    fn centered_text(&self, text: &str, size_pt: f32, center_x: f32, baseline: f32, face: FontFace) {
        let width = FontMetrics::for_face(face).measure_mm(text, size_pt);
        self.text(text, size_pt, center_x - width / 2.0, baseline, face);
    }
}

impl PdfSink {
    /// Draw one card into its slot, returning the number of degraded cells
    fn draw_card(
        &self,
        canvas: &Canvas<'_>,
        layout: &SlotLayout,
        card: &Card,
        label: usize,
    ) -> usize {
        let page = &self.settings.page;
        let center = page.width / 2.0;

        canvas.centered_text(
            &card_title(label),
            self.settings.title_font_pt,
            center,
            layout.title_baseline,
            FontFace::Bold,
        );

        let mut degraded = 0;
        canvas.layer.set_outline_thickness(BORDER_PT);
        for (cell, fitted) in layout.fit_card(card, label, self.settings.cell_padding) {
            canvas.rect(cell.x, cell.y, cell.width, cell.height);
            for (i, (line, width)) in fitted.lines.iter().zip(&fitted.line_widths).enumerate() {
                canvas.text(
                    line,
                    fitted.font_size,
                    cell.center_x() - width / 2.0,
                    cell.y + fitted.baseline(i),
                    FontFace::Regular,
                );
            }
            degraded += usize::from(fitted.degraded);
        }

        canvas.dashed_line(page.margin, page.width - page.margin, layout.cut_y);
        let caption_pt = self.settings.caption_font_pt;
        let caption_baseline = (layout.cut_y + caption_pt * 0.5).min(layout.bottom);
        canvas.centered_text(CUT_CAPTION, caption_pt, center, caption_baseline, FontFace::Regular);

        degraded
    }
}

impl CardSink for PdfSink {
    fn name(&self) -> &'static str {
        "PDF"
    }

    fn mode(&self) -> OutputMode {
        self.mode
    }

    fn file_name(&self, rank: GridRank) -> String {
        pdf_file_name(rank)
    }

    fn render_with_progress(
        &self,
        pages: &[PageDescriptor<'_>],
        rank: GridRank,
        on_page: &mut dyn FnMut(usize),
    ) -> Result<Rendered, RenderError> {
        if pages.is_empty() {
            return Err(RenderError::EmptyPlan);
        }

        let page = self.settings.page;
        let (doc, first_page, first_layer) = PdfDocument::new(
            format!("Bingo Cards {rank}"),
            Mm(page.width),
            Mm(page.height),
            "Layer 1",
        );
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::Pdf(format!("Failed to load font: {e}")))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RenderError::Pdf(format!("Failed to load font: {e}")))?,
        };

        let mut first = Some((first_page, first_layer));
        let mut degraded_cells = 0;

        for descriptor in pages {
            let (page_index, layer_index) = first.take().unwrap_or_else(|| {
                doc.add_page(
                    Mm(page.width),
                    Mm(page.height),
                    format!("Page {}", descriptor.page_index + 1),
                )
            });
            let canvas = Canvas {
                layer: doc.get_page(page_index).get_layer(layer_index),
                fonts: &fonts,
                page_height: page.height,
            };

            for (slot_index, slot) in descriptor.slots.iter().enumerate() {
                let layout = SlotLayout::compute(&self.settings, rank, self.mode, slot_index);
                degraded_cells += self.draw_card(&canvas, &layout, slot.card, slot.label);
            }
            on_page(descriptor.page_index);
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(format!("Failed to save PDF: {e}")))?;

        debug!(pages = pages.len(), bytes = bytes.len(), degraded_cells, "rendered PDF");
        Ok(Rendered {
            bytes,
            pages: pages.len(),
            degraded_cells,
        })
    }
}
