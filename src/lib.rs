//! Bingo Builder
//!
//! Generates batches of randomized word-bingo cards and lays them out for a
//! paged PDF (one card per page) and a printable HTML view (two cards per page).
//!
//! # Quick Start
//!
//! ```rust
//! use bingo_builder::core::GridRank;
//! use bingo_builder::generator::generate_for_rank;
//! use bingo_builder::layout::{OutputMode, plan_pages};
//! use bingo_builder::wordlists::{OFFICE, loader::words_from_slice};
//!
//! let rank: GridRank = "3x3".parse().unwrap();
//! let words = words_from_slice(OFFICE);
//!
//! let batch = generate_for_rank(rank, &words, 10).unwrap();
//! assert_eq!(batch.len(), 10);
//!
//! assert_eq!(plan_pages(&batch, OutputMode::Document).len(), 10);
//! assert_eq!(plan_pages(&batch, OutputMode::Compact).len(), 5);
//! ```

// Core domain types
pub mod core;

// Shuffling and batch creation
pub mod generator;

// Page planning, grid geometry and text fitting
pub mod layout;

// PDF and print view output
pub mod render;

// Settings file
pub mod config;

// Step wizard state machine
pub mod wizard;

// Sample word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
