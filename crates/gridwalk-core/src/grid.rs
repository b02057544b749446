//! The [`Grid`] type — a dense 2D container of arbitrary elements.
//!
//! A `Grid` owns its cells. Every update method returns a new grid and
//! leaves `self` untouched, so a grid can be kept as a snapshot while later
//! stages of a pipeline derive modified copies from it. Equality and hashing
//! compare the cells, not identity.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::adjacency::{Adjacency, AdjacencySelector};
use crate::error::GridError;
use crate::geom::{Coord, Direction, Rotation};

/// A dense row-major 2D grid of `E`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<E>"))]
pub struct Grid<E> {
    cells: Vec<E>,
    rows: usize,
    cols: usize,
}

/// Unchecked wire form of a [`Grid`]; shape is validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid<E> {
    cells: Vec<E>,
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl<E> TryFrom<RawGrid<E>> for Grid<E> {
    type Error = GridError;

    fn try_from(raw: RawGrid<E>) -> Result<Self, GridError> {
        let RawGrid { cells, rows, cols } = raw;
        if rows == 0 || cols == 0 {
            return Err(GridError::invalid(format!(
                "size must be positive, got {rows}x{cols}"
            )));
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::invalid(format!(
                "{} cells do not fill a {rows}x{cols} grid",
                cells.len()
            )));
        }
        Ok(Self { cells, rows, cols })
    }
}

impl<E> Grid<E> {
    /// Build a grid from text lines, mapping every character through
    /// `to_element`.
    ///
    /// Fails if `rows` is empty or the lines differ in length.
    pub fn from_rows<S, F>(rows: &[S], mut to_element: F) -> Result<Self, GridError>
    where
        S: AsRef<str>,
        F: FnMut(char) -> E,
    {
        let parsed = rows
            .iter()
            .map(|line| line.as_ref().chars().map(&mut to_element).collect::<Vec<E>>())
            .collect();
        Self::from_vec(parsed)
    }

    /// Build a grid from nested rows.
    pub fn from_vec(rows: Vec<Vec<E>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::invalid("no rows"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::invalid("rows are empty"));
        }
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::invalid(format!(
                    "row {i} has length {}, expected {cols}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            rows: nrows,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
        {
            Some(c.row as usize * self.cols + c.col as usize)
        } else {
            None
        }
    }

    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    fn out_of_bounds(&self, coord: Coord) -> GridError {
        GridError::OutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Whether `c` lies inside the grid. Never fails.
    #[inline]
    pub fn exists(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    /// The cell at `c`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&E> {
        self.index(c).map(|i| &self.cells[i])
    }

    /// The cell at `c`.
    ///
    /// Use [`exists`](Self::exists) or [`get`](Self::get) when leaving the
    /// grid is an expected outcome.
    pub fn at(&self, c: Coord) -> Result<&E, GridError> {
        self.get(c).ok_or_else(|| self.out_of_bounds(c))
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Option<&[E]> {
        if i >= self.rows {
            return None;
        }
        Some(&self.cells[i * self.cols..(i + 1) * self.cols])
    }

    /// Column `j`, top to bottom.
    pub fn column(&self, j: usize) -> Option<Vec<&E>> {
        if j >= self.cols {
            return None;
        }
        Some(self.cells.iter().skip(j).step_by(self.cols).collect())
    }

    /// Iterator over rows, top to bottom.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, E> {
        self.cells.chunks(self.cols)
    }

    /// Row-major iterator over every coordinate.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    /// Row-major iterator over `(Coord, &E)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &E)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, e)| (self.coord(i), e))
    }

    /// Every coordinate of the grid.
    pub fn all_coordinates(&self) -> HashSet<Coord> {
        self.coords().collect()
    }

    /// Coordinates whose cell satisfies `pred`, row-major.
    pub fn find_value<P>(&self, pred: P) -> impl Iterator<Item = Coord>
    where
        P: Fn(&E) -> bool,
    {
        self.iter().filter(move |&(_, e)| pred(e)).map(|(c, _)| c)
    }

    /// Indices of rows in which every cell satisfies `pred`, ascending.
    pub fn find_rows_matching<P>(&self, pred: P) -> Vec<usize>
    where
        P: Fn(&E) -> bool,
    {
        self.iter_rows()
            .enumerate()
            .filter(|(_, row)| row.iter().all(&pred))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of columns in which every cell satisfies `pred`, ascending.
    pub fn find_columns_matching<P>(&self, pred: P) -> Vec<usize>
    where
        P: Fn(&E) -> bool,
    {
        (0..self.cols)
            .filter(|&j| self.cells.iter().skip(j).step_by(self.cols).all(&pred))
            .collect()
    }

    /// The coordinates on each edge, keyed by the side they face.
    ///
    /// Corners belong to two edges.
    pub fn perimeter_by_direction(&self) -> HashMap<Direction, HashSet<Coord>> {
        let last_row = self.rows as i32 - 1;
        let last_col = self.cols as i32 - 1;
        let mut edges = HashMap::with_capacity(4);
        edges.insert(
            Direction::Up,
            (0..=last_col).map(|c| Coord::new(0, c)).collect(),
        );
        edges.insert(
            Direction::Down,
            (0..=last_col).map(|c| Coord::new(last_row, c)).collect(),
        );
        edges.insert(
            Direction::Left,
            (0..=last_row).map(|r| Coord::new(r, 0)).collect(),
        );
        edges.insert(
            Direction::Right,
            (0..=last_row).map(|r| Coord::new(r, last_col)).collect(),
        );
        edges
    }

    /// All border coordinates.
    pub fn perimeter(&self) -> HashSet<Coord> {
        self.perimeter_by_direction()
            .into_values()
            .flatten()
            .collect()
    }

    /// Top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Coord; 4] {
        let last_row = self.rows as i32 - 1;
        let last_col = self.cols as i32 - 1;
        [
            Coord::new(0, 0),
            Coord::new(0, last_col),
            Coord::new(last_row, last_col),
            Coord::new(last_row, 0),
        ]
    }

    /// In-grid neighbours of `c` under `direction`.
    pub fn neighbors(&self, c: Coord, direction: Adjacency) -> Vec<Coord> {
        self.selector(direction).neighbors(c)
    }

    /// A selector for `direction` bounded to this grid.
    #[inline]
    pub fn selector(&self, direction: Adjacency) -> AdjacencySelector {
        AdjacencySelector::new(direction).within(self.rows as i32, self.cols as i32)
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<F, T>(&self, f: F) -> Grid<T>
    where
        F: FnMut(&E) -> T,
    {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Render each cell through `f`, one line per row.
    pub fn render<F>(&self, f: F) -> String
    where
        F: Fn(&E) -> char,
    {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(&f));
        }
        out
    }
}

impl<E: Clone> Grid<E> {
    /// A `size x size` grid filled with `value`.
    pub fn filled(size: usize, value: E) -> Result<Self, GridError> {
        Self::filled_rect(size, size, value)
    }

    /// A `rows x cols` grid filled with `value`.
    pub fn filled_rect(rows: usize, cols: usize, value: E) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::invalid(format!(
                "size must be positive, got {rows}x{cols}"
            )));
        }
        Ok(Self {
            cells: vec![value; rows * cols],
            rows,
            cols,
        })
    }

    /// A copy of the grid with the cell at `c` replaced by `value`.
    pub fn updated_at(&self, c: Coord, value: E) -> Result<Self, GridError> {
        self.updated_many([(c, value)])
    }

    /// A copy of the grid with every `(coord, value)` update applied in order.
    pub fn updated_many<I>(&self, updates: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (Coord, E)>,
    {
        let mut next = self.clone();
        for (c, value) in updates {
            let i = self.index(c).ok_or_else(|| self.out_of_bounds(c))?;
            next.cells[i] = value;
        }
        Ok(next)
    }

    /// A copy of the grid with `update` applied to every cell in the
    /// inclusive rectangle `top_left..=bottom_right`.
    pub fn draw_rectangle<F>(
        &self,
        top_left: Coord,
        bottom_right: Coord,
        mut update: F,
    ) -> Result<Self, GridError>
    where
        F: FnMut(&E) -> E,
    {
        if top_left.row > bottom_right.row || top_left.col > bottom_right.col {
            return Err(GridError::invalid(format!(
                "inverted rectangle {top_left}..={bottom_right}"
            )));
        }
        if !self.exists(top_left) || !self.exists(bottom_right) {
            return Err(GridError::invalid(format!(
                "rectangle {top_left}..={bottom_right} exceeds {}x{} grid",
                self.rows, self.cols
            )));
        }
        let mut next = self.clone();
        for r in top_left.row..=bottom_right.row {
            for c in top_left.col..=bottom_right.col {
                let i = r as usize * self.cols + c as usize;
                next.cells[i] = update(&self.cells[i]);
            }
        }
        Ok(next)
    }

    /// The grid turned a quarter turn. Only square grids can be rotated.
    pub fn rotate(&self, rotation: Rotation) -> Result<Self, GridError> {
        if !self.is_square() {
            return Err(GridError::invalid(format!(
                "cannot rotate non-square {}x{} grid",
                self.rows, self.cols
            )));
        }
        let n = self.rows;
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..n {
            for c in 0..n {
                let (sr, sc) = match rotation {
                    Rotation::Clockwise => (n - 1 - c, r),
                    Rotation::AntiClockwise => (c, n - 1 - r),
                };
                cells.push(self.cells[sr * n + sc].clone());
            }
        }
        Ok(Self {
            cells,
            rows: n,
            cols: n,
        })
    }
}

impl<E: fmt::Display> fmt::Display for Grid<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for e in row {
                write!(f, "{e}")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_rows(&["ab", "cd"], |c| c).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn grid_rejects_bad_shape() {
        let short = serde_json::from_str::<Grid<u8>>(r#"{"cells":[1],"rows":2,"cols":2}"#);
        let err = short.unwrap_err().to_string();
        assert!(err.contains("do not fill a 2x2 grid"), "{err}");

        let no_cols = serde_json::from_str::<Grid<u8>>(r#"{"cells":[],"rows":3,"cols":0}"#);
        assert!(no_cols.is_err());

        let ok: Grid<u8> =
            serde_json::from_str(r#"{"cells":[1,2,3,4],"rows":2,"cols":2}"#).unwrap();
        assert_eq!(ok.get(Coord::new(1, 1)), Some(&4));
    }
}
