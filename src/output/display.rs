//! Display functions for command results

use super::formatters::{DEFAULT_CELL_CHARS, create_progress_bar, format_card};
use crate::commands::GenerateSummary;
use crate::core::{CardBatch, GRID_PRESETS, GridRank};
use crate::generator::MAX_CARDS;
use crate::wordlists::PRESETS;
use colored::Colorize;

/// Print the result of a generate run
pub fn print_generate_summary(summary: &GenerateSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BINGO CARDS GENERATED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📋 {}", "Batch:".bright_cyan().bold());
    println!("   Grid:     {}", summary.rank.to_string().bright_yellow().bold());
    println!("   Words:    {}", summary.words);
    println!(
        "   Cards:    {} {}",
        summary.cards.to_string().bright_yellow().bold(),
        create_progress_bar(summary.cards, MAX_CARDS, 20).dimmed()
    );

    if !summary.duplicates.is_empty() {
        println!(
            "   {} {}",
            "Repeated entries:".yellow(),
            summary.duplicates.join(", ")
        );
    }

    println!("\n📄 {}", "Files:".bright_cyan().bold());
    for file in &summary.files {
        println!(
            "   {} ({} pages, {} KB)",
            file.path.display().to_string().green(),
            file.pages,
            file.bytes.div_ceil(1024)
        );
    }

    let degraded = summary.degraded_cells();
    if degraded > 0 {
        println!(
            "\n{}",
            format!("⚠️  {degraded} cells hold a word wider than the cell; check the layout")
                .yellow()
        );
    }

    println!(
        "\n{}",
        format!("✅ {} cards ready to print!", summary.cards)
            .green()
            .bold()
    );
}

/// Print every card of `batch` as a text grid
pub fn print_preview(batch: &CardBatch, rank: GridRank) {
    for (label, card) in batch.labeled() {
        println!(
            "\n{}",
            format!("Bingo Card #{label}").bright_cyan().bold()
        );
        for line in format_card(card, rank, DEFAULT_CELL_CHARS) {
            println!("{line}");
        }
    }
}

/// Print the embedded word-list presets and grid sizes
pub fn print_presets() {
    println!("\n{}", "Word list presets".bright_cyan().bold());
    for preset in PRESETS {
        println!(
            "  {:<10} {:>3} words  {}",
            preset.name.bright_yellow(),
            preset.words.len(),
            preset.words[..preset.words.len().min(4)].join(", ").dimmed()
        );
    }

    println!("\n{}", "Grid sizes".bright_cyan().bold());
    for grid in GRID_PRESETS {
        println!(
            "  {:<10} {:>3} words  {}",
            grid.rank().to_string().bright_yellow(),
            grid.word_count(),
            grid.description
        );
    }
}
