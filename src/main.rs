//! Bingo Builder - CLI
//!
//! Word-bingo card generator with a TUI wizard and batch export commands.

use anyhow::{Context, Result};
use bingo_builder::{
    commands::{
        DEFAULT_PREVIEW_COUNT, GenerateConfig, WordSource, resolve_inputs, run_generate,
        run_preview,
    },
    config::Settings,
    core::GridRank,
    layout::OutputMode,
    output::{print_generate_summary, print_presets, print_preview},
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "bingo_builder",
    about = "Generate randomized word-bingo cards as PDF and printable pages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (TOML) with page size, margins, fonts and defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI wizard (default)
    Play,

    /// Generate cards and write the PDF and/or print view
    Generate {
        /// Grid size, e.g. 3x3, 4x5 or 5 (inferred from a square word count if omitted)
        #[arg(short, long)]
        grid: Option<GridRank>,

        /// Word list file, one word or phrase per line
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Built-in word list: office, classroom or party
        #[arg(short, long, conflicts_with = "words")]
        preset: Option<String>,

        /// Number of cards (1-100)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Write only the PDF
        #[arg(long)]
        pdf: bool,

        /// Write only the print view
        #[arg(long)]
        html: bool,

        /// PDF layout: document (one card per page) or compact (two per page)
        #[arg(short, long, default_value = "document")]
        layout: OutputMode,

        /// Output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Print a few shuffled cards to the terminal
    Preview {
        /// Grid size, e.g. 3x3 or 4
        #[arg(short, long)]
        grid: Option<GridRank>,

        /// Word list file, one word or phrase per line
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Built-in word list: office, classroom or party
        #[arg(short, long, conflicts_with = "words")]
        preset: Option<String>,

        /// Number of cards to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_COUNT)]
        count: usize,
    },

    /// List built-in word lists and grid sizes
    Presets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(matches!(command, Commands::Play), cli.verbose);

    let settings = Settings::load_or_default(cli.config.as_deref())?;

    match command {
        Commands::Play => run_play_command(settings),
        Commands::Generate {
            grid,
            words,
            preset,
            count,
            pdf,
            html,
            layout,
            out_dir,
        } => {
            let source = WordSource::from_args(words.as_deref(), preset.as_deref());
            let (rank, words) = resolve_inputs(grid, source)?;
            let mut config = GenerateConfig::new(rank, words, settings);
            config.count = count.unwrap_or(config.count);
            // Neither flag means both outputs
            if pdf || html {
                config.pdf = pdf;
                config.html = html;
            }
            config.pdf_mode = layout;
            if let Some(dir) = out_dir {
                config.out_dir = dir;
            }
            run_generate_command(&config)
        }
        Commands::Preview {
            grid,
            words,
            preset,
            count,
        } => run_preview_command(grid, words.as_deref(), preset.as_deref(), count),
        Commands::Presets => {
            print_presets();
            Ok(())
        }
    }
}

/// Logs go to stderr; the TUI stays silent unless `RUST_LOG` asks otherwise
fn init_tracing(interactive: bool, verbose: bool) {
    let default_filter = match (interactive, verbose) {
        (true, _) => "off",
        (false, true) => "bingo_builder=debug",
        (false, false) => "bingo_builder=info",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_generate_command(config: &GenerateConfig) -> Result<()> {
    let summary = run_generate(config)?;
    print_generate_summary(&summary);
    Ok(())
}

fn run_preview_command(
    grid: Option<GridRank>,
    words: Option<&Path>,
    preset: Option<&str>,
    count: usize,
) -> Result<()> {
    let (rank, words) = resolve_inputs(grid, WordSource::from_args(words, preset))?;
    let batch = run_preview(rank, &words, count)?;
    print_preview(&batch, rank);
    Ok(())
}

fn run_play_command(settings: Settings) -> Result<()> {
    use bingo_builder::interactive::{App, run_tui};

    let app = App::new(settings);
    run_tui(app).context("Interactive session failed")
}
