//! The [`Grid`] type: an owned, rectangular 2D matrix.
//!
//! Unlike a shared view, a `Grid` owns its storage: cloning it deep-copies
//! the cells, and mutating a clone never affects the original.

use std::fmt;

use crate::geom::{Bounds, Point};

/// Errors raised while building or indexing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row with no columns.
    Empty,
    /// A row whose length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Two grids that must share a shape do not.
    Mismatch { expected: Bounds, found: Bounds },
    /// A point outside the grid.
    OutOfBounds { pos: Point, bounds: Bounds },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid is empty"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} columns, expected {expected}"
            ),
            Self::Mismatch { expected, found } => {
                write!(f, "grid shape mismatch: expected {expected}, found {found}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "point {pos} is outside grid bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A dense row-major matrix of `T`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Bounds,
}

impl<T: Copy> Grid<T> {
    /// Create a `rows`×`cols` grid filled with `value`.
    pub fn filled(rows: i32, cols: i32, value: T) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![value; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from rows, checking that there is at least one cell and
    /// that every row is as long as the first.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, width as i32),
        })
    }

    /// The value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<T> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// The value at `p`, or an [`GridError::OutOfBounds`] error.
    pub fn get(&self, p: Point) -> Result<T, GridError> {
        self.at(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// Copy the grid back out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Build a new grid of the same shape by applying `f` to every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Point, T) -> U) -> Grid<U> {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, &v)| f(self.bounds.point(i), v))
            .collect();
        Grid {
            cells,
            bounds: self.bounds,
        }
    }
}

impl<T> Grid<T> {
    /// The extent of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows_len(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols_len(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        let i = self.bounds.index(p)?;
        Some(&mut self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and writes nothing) if `p` is
    /// out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.get_mut(p) {
            Some(c) => {
                *c = value;
                true
            }
            None => false,
        }
    }

    /// The flat row-major cell storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Mutable flat row-major cell storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterator over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.cols.max(1) as usize)
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.bounds.iter().zip(self.cells.iter())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_rows(&[[1i64, -2], [3, 4]]).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
