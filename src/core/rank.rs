//! Grid rank (rows x columns of a card)

use super::BingoError;
use std::fmt;
use std::str::FromStr;

/// Smallest number of rows or columns a card may have
pub const MIN_DIMENSION: usize = 2;

/// Dimensions of a bingo card grid
///
/// Both dimensions are at least [`MIN_DIMENSION`]. There is no upper bound;
/// the interactive presets stop at 5x5 but the layout engine handles any size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRank {
    rows: usize,
    cols: usize,
}

impl GridRank {
    /// Create a rank from explicit dimensions
    ///
    /// # Errors
    /// Returns `BingoError::InvalidRank` if either dimension is below 2.
    ///
    /// # Examples
    /// ```
    /// use bingo_builder::core::GridRank;
    ///
    /// let rank = GridRank::new(3, 4).unwrap();
    /// assert_eq!(rank.cell_count(), 12);
    ///
    /// assert!(GridRank::new(1, 4).is_err());
    /// ```
    pub const fn new(rows: usize, cols: usize) -> Result<Self, BingoError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(BingoError::InvalidRank { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Create a square rank
    ///
    /// # Errors
    /// Returns `BingoError::InvalidRank` if `size` is below 2.
    pub const fn square(size: usize) -> Result<Self, BingoError> {
        Self::new(size, size)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, which is also the number of words a card needs
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    #[must_use]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The larger of the two dimensions, used for font-size breakpoints
    #[inline]
    #[must_use]
    pub const fn max_dimension(&self) -> usize {
        if self.rows > self.cols {
            self.rows
        } else {
            self.cols
        }
    }
}

impl fmt::Display for GridRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for GridRank {
    type Err = BingoError;

    /// Parse `"4x4"`, `"3X5"`, `"3×5"` or a bare `"4"` (square)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || BingoError::UnparsableRank(s.to_string());
        let trimmed = s.trim();

        let mut parts = trimmed.split(['x', 'X', '×']);
        let first = parts.next().ok_or_else(unparsable)?;
        let rows: usize = first.trim().parse().map_err(|_| unparsable())?;

        match (parts.next(), parts.next()) {
            (None, _) => Self::square(rows),
            (Some(second), None) => {
                let cols: usize = second.trim().parse().map_err(|_| unparsable())?;
                Self::new(rows, cols)
            }
            (Some(_), Some(_)) => Err(unparsable()),
        }
    }
}

/// A square grid offered by the interactive grid selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPreset {
    pub size: usize,
    pub description: &'static str,
}

impl GridPreset {
    /// The rank this preset stands for (every preset size is at least 3)
    #[must_use]
    pub const fn rank(&self) -> GridRank {
        GridRank {
            rows: self.size,
            cols: self.size,
        }
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.size * self.size
    }
}

/// Grid sizes offered in the interactive wizard
pub const GRID_PRESETS: [GridPreset; 3] = [
    GridPreset {
        size: 3,
        description: "Perfect for quick games",
    },
    GridPreset {
        size: 4,
        description: "Balanced difficulty",
    },
    GridPreset {
        size: 5,
        description: "Classic Bingo experience",
    },
];
