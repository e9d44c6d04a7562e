//! `grid` — the immutable letter grid and the coordinates used to address it.
//!
//! Positions follow the puzzle's human-facing convention: 1-indexed, with a
//! [`Coordinate`] written as `(x, y)` = `(column, row)`.
//!
//! A [`Grid`] can only be built through [`Grid::new`] (or `str::parse`), which
//! rejects empty and non-rectangular input. Every `Grid` value is therefore
//! rectangular and non-empty, and the searcher relies on this.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::SearchError;

/// A cell position, 1-indexed: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step by a signed `(dx, dy)`. `None` if the result would leave the
    /// positive quadrant; grid bounds are the caller's business.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Coordinate> {
        let x = self.x.checked_add_signed(dx).filter(|&x| x >= 1)?;
        let y = self.y.checked_add_signed(dy).filter(|&y| y >= 1)?;
        Some(Coordinate { x, y })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Rectangular, non-empty, immutable 2D buffer of `char` cells.
///
/// Cells are stored row-major in a single `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Build a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyGrid`] if there are no rows or the first row is empty.
    /// - [`SearchError::RaggedGrid`] naming the first (1-indexed) row whose
    ///   length differs from the first row's.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, SearchError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(SearchError::EmptyGrid);
        }

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SearchError::RaggedGrid { row: idx + 1, expected: width, found: row.len() });
        }

        let height = rows.len();
        let cells: Vec<char> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), height * width);

        Ok(Grid { cells, height, width })
    }

    /// Build a grid from string rows, one `char` per cell.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new`].
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, SearchError> {
        Grid::new(rows.iter().map(|r| r.as_ref().chars().collect()).collect())
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the 1-indexed `(row, column)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        (1..=self.height).contains(&row) && (1..=self.width).contains(&column)
    }

    /// Cell at 1-indexed `(row, column)`.
    ///
    /// Callers check bounds first (with [`Grid::contains`], or by iterating
    /// `1..=height` / `1..=width`); reading outside the grid is a bug.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> char {
        debug_assert!(
            self.contains(row, column),
            "grid read out of bounds: row {row}, column {column} (grid is {}x{})",
            self.height,
            self.width
        );
        self.cells[(row - 1) * self.width + (column - 1)]
    }

    /// Cell at `pos`, or `None` if it is outside the grid.
    #[must_use]
    pub fn at(&self, pos: Coordinate) -> Option<char> {
        self.contains(pos.y, pos.x).then(|| self.get(pos.y, pos.x))
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, char> {
        self.cells.chunks(self.width)
    }

    /// All coordinates in row-major order (row 1 first, left to right).
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Coordinate { x, y }))
    }

    /// A copy with every cell lowercased (cells with multi-char lowercase
    /// forms are left unchanged).
    #[must_use]
    pub fn to_lowercase(&self) -> Grid {
        let cells = self.cells.iter().map(|&c| single_lowercase(c)).collect();
        Grid { cells, height: self.height, width: self.width }
    }
}

// `char::to_lowercase` may yield several chars; keep the cell as-is in that case
pub(crate) fn single_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl FromStr for Grid {
    type Err = SearchError;

    /// One row per non-blank line; surrounding whitespace on each line is trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
