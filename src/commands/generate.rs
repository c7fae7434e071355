//! Card generation command
//!
//! Generates a batch and writes the PDF and/or print view without the TUI.

use crate::config::Settings;
use crate::core::{GridRank, WordList};
use crate::generator::generate_for_rank;
use crate::layout::OutputMode;
use crate::render::{CardSink, ExportedFile, PdfSink, PrintSink, export};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration for a generate run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub rank: GridRank,
    pub words: WordList,
    pub count: usize,
    pub pdf: bool,
    pub html: bool,
    /// Cards per page in the PDF
    pub pdf_mode: OutputMode,
    pub out_dir: PathBuf,
    pub settings: Settings,
    pub show_progress: bool,
}

impl GenerateConfig {
    /// Both outputs, settings defaults for everything else
    #[must_use]
    pub fn new(rank: GridRank, words: WordList, settings: Settings) -> Self {
        Self {
            rank,
            words,
            count: settings.default_count,
            pdf: true,
            html: true,
            pdf_mode: OutputMode::Document,
            out_dir: settings.output_dir.clone(),
            settings,
            show_progress: true,
        }
    }
}

/// Result of a generate run
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub rank: GridRank,
    pub cards: usize,
    pub words: usize,
    /// Entries that appear more than once in the word list
    pub duplicates: Vec<String>,
    pub files: Vec<ExportedFile>,
}

impl GenerateSummary {
    #[must_use]
    pub fn degraded_cells(&self) -> usize {
        self.files.iter().map(|f| f.degraded_cells).sum()
    }
}

/// Generate cards and write every requested output
///
/// # Errors
///
/// Returns an error if:
/// - The word list does not fill the grid, or the count is out of range
/// - An output cannot be rendered or written
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateSummary> {
    let batch = generate_for_rank(config.rank, &config.words, config.count)
        .context("Failed to generate cards")?;

    let duplicates: Vec<String> = config
        .words
        .duplicates()
        .into_iter()
        .map(str::to_string)
        .collect();
    if !duplicates.is_empty() {
        debug!(?duplicates, "word list has repeated entries");
    }

    let mut sinks: Vec<Box<dyn CardSink>> = Vec::new();
    if config.pdf {
        sinks.push(Box::new(PdfSink::with_mode(
            config.settings.clone(),
            config.pdf_mode,
        )));
    }
    if config.html {
        sinks.push(Box::new(PrintSink::new(config.settings.clone())));
    }

    let total_pages: usize = sinks
        .iter()
        .map(|sink| sink.mode().page_count(batch.len()))
        .sum();
    let pb = progress_bar(total_pages, config.show_progress)?;

    let mut files = Vec::with_capacity(sinks.len());
    for sink in &sinks {
        pb.set_message(format!("Rendering {}", sink.name()));
        let file = export(sink.as_ref(), &batch, config.rank, &config.out_dir, &mut |_| {
            pb.inc(1);
        })
        .with_context(|| format!("Failed to export {}", sink.name()))?;
        files.push(file);
    }
    pb.finish_and_clear();

    info!(
        rank = %config.rank,
        cards = batch.len(),
        files = files.len(),
        "generation complete"
    );

    Ok(GenerateSummary {
        rank: config.rank,
        cards: batch.len(),
        words: config.words.len(),
        duplicates,
        files,
    })
}

fn progress_bar(len: usize, visible: bool) -> Result<ProgressBar> {
    if !visible {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} pages | {msg}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}
