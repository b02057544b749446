//! Error type for grid construction and access.

use std::fmt;

use crate::geom::Coord;

/// Errors arising from grid construction or coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Malformed construction or update arguments.
    InvalidInput {
        /// What went wrong.
        reason: String,
    },
    /// A coordinate lies outside the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Height of the grid.
        rows: usize,
        /// Width of the grid.
        cols: usize,
    },
}

impl GridError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid grid input: {reason}"),
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} out of bounds for {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn out_of_bounds_reports_height_then_width() {
        let g = Grid::from_rows(&["abc", "def"], |c| c).unwrap();
        let err = g.at(Coord::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                coord: Coord::new(2, 0),
                rows: 2,
                cols: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "coordinate (2, 0) out of bounds for 2x3 grid"
        );
    }
}
