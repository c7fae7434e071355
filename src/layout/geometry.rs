//! Grid geometry
//!
//! Turns page dimensions, margins and a grid rank into cell boxes. All values are
//! millimetres with the origin at the top-left corner of the page (or slot).

use crate::core::GridRank;
use serde::{Deserialize, Serialize};

/// Physical page (or page slot) size and uniform margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// ISO A4 portrait with a 15mm margin
    pub const A4: Self = Self {
        width: 210.0,
        height: 297.0,
        margin: 15.0,
    };

    /// Width left between the side margins
    #[must_use]
    pub fn content_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    /// Split the page into `count` equal horizontal bands, returning band `index`
    ///
    /// The band keeps the page width and margin; its height is `height / count`.
    /// Returns the band's top offset on the page along with its geometry.
    #[must_use]
    pub fn slot(&self, index: usize, count: usize) -> (f32, Self) {
        let count = count.max(1);
        let height = self.height / count as f32;
        (
            height * index as f32,
            Self {
                width: self.width,
                height,
                margin: self.margin,
            },
        )
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// One cell rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CellBox {
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// The same box moved down by `dy`
    #[must_use]
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }
}

/// Bounding box of a laid-out grid plus its cell size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    pub x: f32,
    pub y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows: usize,
    pub cols: usize,
    /// Factor applied to fit the page height; 1.0 when no shrinking was needed
    pub scale: f32,
}

impl GridFrame {
    #[must_use]
    pub fn width(&self) -> f32 {
        self.cell_width * self.cols as f32
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.cell_height * self.rows as f32
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height()
    }

    #[must_use]
    pub fn is_shrunk(&self) -> bool {
        self.scale < 1.0
    }

    /// Cell boxes in row-major order
    #[must_use]
    pub fn cell_boxes(&self) -> Vec<CellBox> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| CellBox {
                x: self.x + col as f32 * self.cell_width,
                y: self.y + row as f32 * self.cell_height,
                width: self.cell_width,
                height: self.cell_height,
            })
            .collect()
    }
}

/// Lay out a `rank` grid whose top edge sits at `grid_top`
///
/// Cells span the content width. Square ranks get square cells; other ranks
/// divide the height left below `grid_top` (down to the bottom margin) evenly
/// between rows. A grid taller than that space is scaled down uniformly and
/// centred horizontally, so nothing is pushed off the page.
#[must_use]
pub fn compute_grid_frame(page: &PageGeometry, rank: GridRank, grid_top: f32) -> GridFrame {
    let rows = rank.rows();
    let cols = rank.cols();
    let content_width = page.content_width();
    let available_height = (page.height - page.margin - grid_top).max(0.0);

    let cell_width = content_width / cols as f32;
    let cell_height = if rank.is_square() {
        cell_width
    } else {
        available_height / rows as f32
    };

    let natural_height = cell_height * rows as f32;
    let scale = if natural_height > available_height && natural_height > 0.0 {
        available_height / natural_height
    } else {
        1.0
    };

    let cell_width = cell_width * scale;
    let cell_height = cell_height * scale;
    let x = page.margin + (content_width - cell_width * cols as f32) / 2.0;

    GridFrame {
        x,
        y: grid_top,
        cell_width,
        cell_height,
        rows,
        cols,
        scale,
    }
}

/// Cell boxes for a `rank` grid starting at `grid_top`, in row-major order
///
/// # Examples
/// ```
/// use bingo_builder::core::GridRank;
/// use bingo_builder::layout::{PageGeometry, compute_cell_boxes};
///
/// let boxes = compute_cell_boxes(&PageGeometry::A4, GridRank::square(3).unwrap(), 25.0);
/// assert_eq!(boxes.len(), 9);
/// assert!((boxes[0].width - 60.0).abs() < 1e-4);
/// assert!((boxes[1].x - 75.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn compute_cell_boxes(page: &PageGeometry, rank: GridRank, grid_top: f32) -> Vec<CellBox> {
    compute_grid_frame(page, rank, grid_top).cell_boxes()
}
