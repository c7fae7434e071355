//! Interactive TUI wizard

mod app;
mod rendering;

pub use app::{App, ExportKind, Message, MessageStyle, run_tui};
