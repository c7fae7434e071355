//! Card layout engine
//!
//! Pure computation shared by every renderer: page planning, grid geometry and
//! cell text fitting. Nothing in here draws.

mod geometry;
pub mod metrics;
mod planner;
mod text_fit;

pub use geometry::{CellBox, GridFrame, PageGeometry, compute_cell_boxes, compute_grid_frame};
pub use planner::{CardSlot, OutputMode, PageDescriptor, plan_pages};
pub use text_fit::{
    DEFAULT_CELL_PADDING, FittedText, FontBreakpoint, FontSizeTable, LINE_SPACING, fit_text,
    wrap_with,
};
