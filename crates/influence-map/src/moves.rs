//! Move queries, randomized best-move selection and greedy descent paths.

use std::cmp::Ordering;

use influence_core::{Cost, Point};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::adjacency::{Adjacency, Neighbors};
use crate::error::MapError;
use crate::field::Field;

impl<T: Cost> Field<T> {
    /// Neighbours of `p` under `adjacency` whose value is strictly below
    /// `value` (default: the value at `p`) and is not `bad`.
    ///
    /// Returns nothing when `value` is already at or below the goal value.
    /// The order of the result is unspecified.
    pub fn moves(
        &self,
        p: Point,
        value: Option<T>,
        adjacency: Adjacency,
    ) -> Result<Vec<(Point, T)>, MapError> {
        let current = self.value(p)?;
        let value = value.unwrap_or(current);
        if value <= self.sentinels.goal {
            return Ok(Vec::new());
        }
        let bad = self.sentinels.bad;
        let mut nb = Neighbors::new();
        Ok(nb
            .of(adjacency, p, self.bounds())
            .iter()
            .filter_map(|&n| {
                let v = self.grid.at(n)?;
                (v < value && v != bad).then_some((n, v))
            })
            .collect())
    }

    /// The lowest downhill neighbour of `p`, breaking ties at random.
    ///
    /// Returns `None` when no neighbour is strictly lower.
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        p: Point,
        adjacency: Adjacency,
        rng: &mut R,
    ) -> Result<Option<Point>, MapError> {
        Ok(pick_lowest(self.moves(p, None, adjacency)?, rng))
    }

    /// Follow best moves from `start` until none is left.
    ///
    /// The returned points exclude `start`. The walk ends on a goal or on a
    /// plateau with no strictly lower neighbour; the latter happens when the
    /// relaxation metric never connected `start` to a goal.
    pub fn path<R: Rng + ?Sized>(
        &self,
        start: Point,
        adjacency: Adjacency,
        rng: &mut R,
    ) -> Result<Vec<Point>, MapError> {
        let mut path = Vec::new();
        let mut current = start;
        while let Some(next) = self.best_move(current, adjacency, rng)? {
            path.push(next);
            current = next;
        }
        let end = self.value(current)?;
        if end != self.sentinels.goal {
            log::debug!("path from {start} stopped at {current} with value {end}");
        }
        Ok(path)
    }
}

/// Shuffle, then stable-sort by value: the first entry is a lowest-valued
/// candidate, chosen uniformly among ties.
pub(crate) fn pick_lowest<T: Cost, R: Rng + ?Sized>(
    mut candidates: Vec<(Point, T)>,
    rng: &mut R,
) -> Option<Point> {
    candidates.shuffle(rng);
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    candidates.first().map(|&(p, _)| p)
}
