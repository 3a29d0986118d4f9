//! Weighted combination of several fields.
//!
//! A combined cell is `own * own_weight + Σ other[i] * weights[i]`. A field
//! holding its `bad` value at a cell vetoes that cell: the composite is
//! impassable there whatever the weights. Extra fields with no matching
//! weight take no part, neither in the sum nor in the veto.

use influence_core::{Cost, Grid, GridError, Point};
use rand::Rng;

use crate::adjacency::Adjacency;
use crate::error::MapError;
use crate::field::Field;
use crate::moves::pick_lowest;

impl<T: Cost> Field<T> {
    /// Combine this field with `others` into a new field.
    ///
    /// The result carries this field's sentinels. No input is modified.
    pub fn combine(
        &self,
        others: &[&Field<T>],
        weights: &[T],
        own_weight: T,
    ) -> Result<Field<T>, MapError> {
        self.check_shapes(others)?;
        let bad = self.sentinels.bad;
        let grid: Grid<T> = self.grid.map(|p, _| {
            self.combined_at(p, others, weights, own_weight)
                .unwrap_or(bad)
        });
        Ok(Field::from_grid(grid, self.sentinels))
    }

    /// The best next step from `p` on the combined field, without building
    /// the whole composite.
    ///
    /// Only the steps [`moves`](Self::moves) offers from `p` are scored.
    /// Returns `None` if `p` is vetoed, if its combined cost is already at
    /// or below the goal value, or if no veto-free candidate is strictly
    /// cheaper. Ties are broken at random.
    pub fn best_combined_move<R: Rng + ?Sized>(
        &self,
        p: Point,
        others: &[&Field<T>],
        weights: &[T],
        own_weight: T,
        adjacency: Adjacency,
        rng: &mut R,
    ) -> Result<Option<Point>, MapError> {
        self.check_shapes(others)?;
        self.value(p)?;
        let Some(current) = self.combined_at(p, others, weights, own_weight) else {
            return Ok(None);
        };
        if current <= self.sentinels.goal {
            return Ok(None);
        }
        let candidates = self
            .moves(p, None, adjacency)?
            .into_iter()
            .filter_map(|(n, _)| {
                let v = self.combined_at(n, others, weights, own_weight)?;
                (v < current).then_some((n, v))
            })
            .collect();
        Ok(pick_lowest(candidates, rng))
    }

    /// Weighted sum at `p`, or `None` if a participating field vetoes it.
    fn combined_at(
        &self,
        p: Point,
        others: &[&Field<T>],
        weights: &[T],
        own_weight: T,
    ) -> Option<T> {
        let own = self.grid.at(p)?;
        if own == self.sentinels.bad {
            return None;
        }
        let mut total = own.times(own_weight);
        for (other, &w) in others.iter().zip(weights) {
            let v = other.grid.at(p)?;
            if v == other.sentinels.bad {
                return None;
            }
            total = total.plus(v.times(w));
        }
        Some(total)
    }

    fn check_shapes(&self, others: &[&Field<T>]) -> Result<(), MapError> {
        let expected = self.bounds();
        match others.iter().find(|o| o.bounds() != expected) {
            Some(o) => Err(MapError::Shape(GridError::Mismatch {
                expected,
                found: o.bounds(),
            })),
            None => Ok(()),
        }
    }
}
