//! Print view sink
//!
//! Produces a standalone HTML document for the browser's print command. Every
//! page of the plan becomes one `.sheet` element sized to the physical page;
//! cells are absolutely positioned in millimetres from the same geometry the
//! PDF uses. When printing, only the sheets inside `#print-region` are shown.

use super::{CUT_CAPTION, CardSink, RenderError, Rendered, SlotLayout, card_title, print_file_name};
use crate::config::Settings;
use crate::core::{Card, GridRank};
use crate::layout::{OutputMode, PageDescriptor};
use std::fmt::Write;
use tracing::debug;

/// Renders cards into a printable HTML page, two cards per sheet by default
#[derive(Debug, Clone)]
pub struct PrintSink {
    settings: Settings,
    mode: OutputMode,
}

impl PrintSink {
    /// Two cards per page
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_mode(settings, OutputMode::Compact)
    }

    #[must_use]
    pub const fn with_mode(settings: Settings, mode: OutputMode) -> Self {
        Self { settings, mode }
    }

    fn write_head(&self, out: &mut String, rank: GridRank) -> std::fmt::Result {
        let page = &self.settings.page;
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>Bingo Cards {rank}</title>")?;
        writeln!(out, "<style>")?;
        writeln!(out, "@page {{ size: {}mm {}mm; margin: 0; }}", page.width, page.height)?;
        writeln!(out, "body {{ margin: 0; font-family: Helvetica, Arial, sans-serif; }}")?;
        writeln!(out, ".toolbar {{ padding: 4mm; font-size: 11pt; background: #f0f0f0; }}")?;
        writeln!(
            out,
            ".sheet {{ position: relative; width: {}mm; height: {}mm; overflow: hidden; }}",
            page.width, page.height
        )?;
        writeln!(out, ".sheet.break {{ page-break-after: always; break-after: page; }}")?;
        writeln!(
            out,
            ".title {{ position: absolute; left: 0; right: 0; text-align: center; \
             font-weight: bold; font-size: {}pt; }}",
            self.settings.title_font_pt
        )?;
        writeln!(
            out,
            ".cell {{ position: absolute; box-sizing: border-box; border: 0.3mm solid #000; \
             display: flex; align-items: center; justify-content: center; text-align: center; }}"
        )?;
        writeln!(
            out,
            ".cut {{ position: absolute; border-top: 0.3mm dashed #666; text-align: center; \
             color: #666; font-size: {}pt; }}",
            self.settings.caption_font_pt
        )?;
        // Sheets stay in normal flow so the browser paginates at each break
        writeln!(out, "@media print {{ .toolbar {{ display: none; }} }}")?;
        writeln!(out, "</style>")?;
        writeln!(out, "</head>")
    }

    /// Write one card and return its number of degraded cells
    fn write_card(
        &self,
        out: &mut String,
        layout: &SlotLayout,
        card: &Card,
        label: usize,
    ) -> Result<usize, RenderError> {
        let page = &self.settings.page;
        let title_top = layout.top + page.margin;

        writeln!(
            out,
            "<div class=\"title\" style=\"top: {title_top:.2}mm; height: {:.2}mm; line-height: {:.2}mm;\">{}</div>",
            self.settings.title_band,
            self.settings.title_band,
            escape_html(&card_title(label))
        )?;

        let mut degraded = 0;
        for (cell, fitted) in layout.fit_card(card, label, self.settings.cell_padding) {
            let text = fitted
                .lines
                .iter()
                .map(|line| escape_html(line))
                .collect::<Vec<_>>()
                .join("<br>");
            writeln!(
                out,
                "<div class=\"cell\" style=\"left: {:.2}mm; top: {:.2}mm; width: {:.2}mm; height: {:.2}mm; \
                 padding: 0 {:.2}mm; font-size: {}pt; line-height: {:.2}mm;\">{text}</div>",
                cell.x,
                cell.y,
                cell.width,
                cell.height,
                self.settings.cell_padding,
                fitted.font_size,
                fitted.line_height,
            )?;
            degraded += usize::from(fitted.degraded);
        }

        writeln!(
            out,
            "<div class=\"cut\" style=\"left: {:.2}mm; top: {:.2}mm; width: {:.2}mm;\">&#9986; {CUT_CAPTION}</div>",
            page.margin,
            layout.cut_y,
            page.content_width(),
        )?;
        Ok(degraded)
    }
}

impl CardSink for PrintSink {
    fn name(&self) -> &'static str {
        "print view"
    }

    fn mode(&self) -> OutputMode {
        self.mode
    }

    fn file_name(&self, rank: GridRank) -> String {
        print_file_name(rank)
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

        let card_count: usize = pages.iter().map(|p| p.slots.len()).sum();
        let mut out = String::new();
        self.write_head(&mut out, rank)?;

        if self.settings.auto_print {
            writeln!(out, "<body onload=\"window.print()\">")?;
        } else {
            writeln!(out, "<body>")?;
        }
        writeln!(
            out,
            "<div class=\"toolbar\">Bingo Cards {rank}: {card_count} cards on {} pages. \
             Use your browser's print command to print them.</div>",
            pages.len()
        )?;
        writeln!(out, "<div id=\"print-region\">")?;

        let mut degraded_cells = 0;
        for descriptor in pages {
            let class = if descriptor.is_last(pages.len()) {
                "sheet"
            } else {
                "sheet break"
            };
            writeln!(out, "<section class=\"{class}\">")?;
            for (slot_index, slot) in descriptor.slots.iter().enumerate() {
                let layout = SlotLayout::compute(&self.settings, rank, self.mode, slot_index);
                degraded_cells += self.write_card(&mut out, &layout, slot.card, slot.label)?;
            }
            writeln!(out, "</section>")?;
            on_page(descriptor.page_index);
        }

        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        debug!(pages = pages.len(), bytes = out.len(), degraded_cells, "rendered print view");
        Ok(Rendered {
            bytes: out.into_bytes(),
            pages: pages.len(),
            degraded_cells,
        })
    }
}

/// Escape text for use inside HTML elements and attribute values
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
