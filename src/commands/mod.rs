//! Command implementations

pub mod generate;
pub mod input;
pub mod preview;

pub use generate::{GenerateConfig, GenerateSummary, run_generate};
pub use input::{WordSource, resolve_inputs};
pub use preview::{DEFAULT_PREVIEW_COUNT, run_preview};
