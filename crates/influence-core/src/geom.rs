//! Geometry primitives: [`Point`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` with row 0 at the top. Both axes use `i32`
//! so that neighbour offsets can step outside the grid and be rejected by
//! [`Bounds::contains`] instead of wrapping.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid coordinate. `row` grows down, `col` grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether `other` differs from `self` on both axes (a corner step).
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.row != other.row && self.col != other.col
    }

    /// The four cardinal neighbours (north, east, south, west).
    #[inline]
    pub fn cardinals(self) -> [Point; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }

    /// The four corner neighbours (north-east, south-east, south-west,
    /// north-west).
    #[inline]
    pub fn diagonals(self) -> [Point; 4] {
        [
            self.shift(-1, 1),
            self.shift(1, 1),
            self.shift(1, -1),
            self.shift(-1, -1),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// The extent of a grid anchored at the origin: rows `0..rows`, columns
/// `0..cols`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative sizes are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Whether the bounds hold no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Largest valid row index, or -1 when empty.
    #[inline]
    pub fn max_row(self) -> i32 {
        self.rows - 1
    }

    /// Largest valid column index, or -1 when empty.
    #[inline]
    pub fn max_col(self) -> i32 {
        self.cols - 1
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over all points.
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = BoundsIter;

    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

/// Row-major iterator over the points of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.point(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.bounds.len().saturating_sub(self.next);
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for BoundsIter {}
