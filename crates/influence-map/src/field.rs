//! The [`Field`] data model: a cost matrix plus its sentinel values.

use std::fmt;

use influence_core::{Bounds, Cost, Grid, Point};

use crate::config::Sentinels;
use crate::error::MapError;
use crate::text::serialize_grid;

/// A rectangular matrix of potential values.
///
/// After relaxation every reachable cell holds a signed distance to the
/// nearest goal cell; `bad` and `goal` cells are never rewritten, and cells
/// no goal can reach keep `unreached`. Cloning deep-copies the matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field<T> {
    pub(crate) grid: Grid<T>,
    pub(crate) sentinels: Sentinels<T>,
}

impl<T: Cost> Field<T> {
    /// Wrap an existing grid without relaxing it.
    pub fn from_grid(grid: Grid<T>, sentinels: Sentinels<T>) -> Self {
        Self { grid, sentinels }
    }

    /// Build a field from numeric rows without relaxing it.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R], sentinels: Sentinels<T>) -> Result<Self, MapError> {
        Ok(Self::from_grid(Grid::from_rows(rows)?, sentinels))
    }

    /// The marker values this field was built with.
    #[inline]
    pub fn sentinels(&self) -> &Sentinels<T> {
        &self.sentinels
    }

    /// The underlying matrix.
    #[inline]
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// The extent of the field.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    /// The value at `p`.
    pub fn value(&self, p: Point) -> Result<T, MapError> {
        Ok(self.grid.get(p)?)
    }

    /// Whether no goal reaches `p`, i.e. it still holds `unreached`.
    pub fn is_unconnected(&self, p: Point) -> Result<bool, MapError> {
        Ok(self.value(p)? == self.sentinels.unreached)
    }

    /// All cells still holding `unreached`, in row-major order.
    pub fn unconnected(&self) -> Vec<Point> {
        self.grid
            .iter()
            .filter(|&(_, &v)| v == self.sentinels.unreached)
            .map(|(p, _)| p)
            .collect()
    }

    /// Copy the values out as rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.grid.to_rows()
    }

    /// Write `(point, value)` entries straight into the matrix without
    /// relaxing.
    ///
    /// Every entry is checked before any is written, so on error the field
    /// is unchanged.
    pub fn update(&mut self, entries: &[(Point, T)]) -> Result<(), MapError> {
        let bounds = self.bounds();
        for &(pos, v) in entries {
            if !bounds.contains(pos) {
                return Err(MapError::Bounds { pos, bounds });
            }
            if !v.is_valid() {
                return Err(MapError::Value { pos });
            }
        }
        for &(pos, v) in entries {
            self.grid.set(pos, v);
        }
        Ok(())
    }

    /// Put every cell that is neither `bad` nor `goal` back to `unreached`.
    pub(crate) fn reset(&mut self) {
        let s = self.sentinels;
        for v in self.grid.as_mut_slice() {
            if !s.is_fixed(*v) {
                *v = s.unreached;
            }
        }
    }
}

impl<T: Cost> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&[T]> = self.grid.rows().collect();
        f.write_str(&serialize_grid(&rows, ",", "\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(rows: &[[i64; 3]]) -> Field<i64> {
        Field::from_rows(rows, Sentinels::default()).unwrap()
    }

    #[test]
    fn update_writes_all_entries() {
        let mut f = field(&[[5, 5, 5], [5, 5, 5]]);
        f.update(&[(Point::new(0, 0), 1), (Point::new(1, 2), 2)])
            .unwrap();
        assert_eq!(f.to_rows(), vec![vec![1, 5, 5], vec![5, 5, 2]]);
    }

    #[test]
    fn update_is_all_or_nothing() {
        let mut f = field(&[[5, 5, 5], [5, 5, 5]]);
        let before = f.clone();
        let err = f
            .update(&[(Point::new(0, 0), 1), (Point::new(2, 0), 2)])
            .unwrap_err();
        assert_eq!(
            err,
            MapError::Bounds {
                pos: Point::new(2, 0),
                bounds: Bounds::new(2, 3)
            }
        );
        assert_eq!(f, before);
    }

    #[test]
    fn update_rejects_nan() {
        let mut f = Field::from_rows(&[[1.0f64, 2.0]], Sentinels::default()).unwrap();
        let err = f
            .update(&[(Point::new(0, 0), 0.5), (Point::new(0, 1), f64::NAN)])
            .unwrap_err();
        assert_eq!(err, MapError::Value { pos: Point::new(0, 1) });
        assert_eq!(f.value(Point::new(0, 0)).unwrap(), 1.0);
    }

    #[test]
    fn reset_keeps_only_markers() {
        let s = Sentinels::<i64>::default();
        let mut f = field(&[[s.bad, s.goal, 3], [-4, 7, s.unreached]]);
        f.reset();
        assert_eq!(
            f.to_rows(),
            vec![
                vec![s.bad, s.goal, s.unreached],
                vec![s.unreached, s.unreached, s.unreached]
            ]
        );
    }

    #[test]
    fn unconnected_cells() {
        let s = Sentinels::<i64>::default();
        let f = field(&[[s.unreached, 1, 0], [s.bad, s.unreached, 2]]);
        assert_eq!(f.unconnected(), vec![Point::new(0, 0), Point::new(1, 1)]);
        assert!(f.is_unconnected(Point::new(0, 0)).unwrap());
        assert!(!f.is_unconnected(Point::new(0, 1)).unwrap());
        assert!(f.is_unconnected(Point::new(9, 9)).is_err());
    }

    #[test]
    fn display_is_comma_separated() {
        let f = field(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(f.to_string(), "1,2,3\n4,5,6");
    }

    #[test]
    fn clone_is_independent() {
        let mut a = field(&[[1, 2, 3]]);
        let b = a.clone();
        a.update(&[(Point::new(0, 0), 9)]).unwrap();
        assert_eq!(b.value(Point::new(0, 0)).unwrap(), 1);
    }
}
