//! The relaxation engine.
//!
//! Each sweep recomputes every non-fixed cell from the values of the
//! previous sweep (Jacobi style), so the result of a sweep does not depend
//! on scan order or on the order neighbours are enumerated in. Sweeps repeat
//! until one changes nothing.

use influence_core::{Bounds, Cost, Point};

use crate::adjacency::{Metric, Neighbors};
use crate::config::Sentinels;
use crate::field::Field;

impl<T: Cost> Field<T> {
    /// Relax the field until it is stable and return the number of sweeps,
    /// counting the final sweep that changed nothing.
    ///
    /// An already converged field therefore reports 1.
    pub fn relax(&mut self, metric: Metric) -> usize {
        let mut prev = Vec::with_capacity(self.bounds().len());
        let mut nb = Neighbors::new();
        let mut sweeps = 0;
        loop {
            sweeps += 1;
            let changed = self.sweep_with(metric, &mut prev, &mut nb);
            log::trace!("relaxation sweep {sweeps}: {changed} cells changed");
            if changed == 0 {
                return sweeps;
            }
        }
    }

    /// Run a single sweep and return the number of cells it changed.
    pub fn sweep(&mut self, metric: Metric) -> usize {
        let mut prev = Vec::with_capacity(self.bounds().len());
        self.sweep_with(metric, &mut prev, &mut Neighbors::new())
    }

    fn sweep_with(&mut self, metric: Metric, prev: &mut Vec<T>, nb: &mut Neighbors) -> usize {
        prev.clear();
        prev.extend_from_slice(self.grid.as_slice());
        let bounds = self.bounds();
        let sentinels = self.sentinels;
        let mut changed = 0;
        for (i, cell) in self.grid.as_mut_slice().iter_mut().enumerate() {
            let p = bounds.point(i);
            if let Some(v) = relax_cell(prev, bounds, p, &sentinels, metric, nb) {
                if v != *cell {
                    *cell = v;
                    changed += 1;
                }
            }
        }
        changed
    }
}

/// The new value for `p` given the previous sweep, or `None` if it keeps
/// its current one.
fn relax_cell<T: Cost>(
    prev: &[T],
    bounds: Bounds,
    p: Point,
    s: &Sentinels<T>,
    metric: Metric,
    nb: &mut Neighbors,
) -> Option<T> {
    let value = prev[bounds.index(p)?];
    if s.is_fixed(value) {
        return None;
    }
    let magnitude = value.magnitude();
    let neighbors = nb.of(metric.adjacency(), p, bounds);
    let candidates = neighbors.iter().filter_map(|&n| {
        let nv = prev[bounds.index(n)?];
        (nv != s.bad).then(|| (n, nv.magnitude()))
    });

    let relaxed = if metric.is_weighted() {
        // Minimise the resulting magnitude over (neighbour, edge weight).
        let (best, weight) = candidates
            .map(|(n, m)| (m, metric.edge_weight::<T>(p, n)))
            .reduce(|a, b| if b.0.plus(b.1) < a.0.plus(a.1) { b } else { a })?;
        let diagonal = T::from_f64(std::f64::consts::SQRT_2);
        (magnitude > best.plus(diagonal)).then(|| best.plus(weight))
    } else {
        let mut best: Option<T> = None;
        for (_, m) in candidates {
            let b = best.map_or(m, |b| b.lesser(m));
            best = Some(b);
            if b == s.goal {
                break;
            }
        }
        let best = best?;
        // Settling at best + 1 needs a gap of two; a gap of one is already
        // stable.
        (magnitude >= best.plus(T::ONE).plus(T::ONE)).then(|| best.plus(T::ONE))
    };
    relaxed.map(|m| m.with_sign_of(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    const U: i64 = i64::DEFAULT_UNREACHED;
    const B: i64 = i64::DEFAULT_BAD;

    fn field(rows: &[Vec<i64>]) -> Field<i64> {
        Field::from_rows(rows, Sentinels::default()).unwrap()
    }

    #[test]
    fn three_by_three_cardinal() {
        let mut f = field(&[vec![U, U, U], vec![U, U, U], vec![U, U, 0]]);
        let sweeps = f.relax(Metric::Cardinal);
        assert_eq!(f.to_rows(), vec![vec![4, 3, 2], vec![3, 2, 1], vec![2, 1, 0]]);
        assert_eq!(sweeps, 5);
    }

    #[test]
    fn three_by_three_uniform8() {
        let mut f = field(&[vec![U, U, U], vec![U, U, U], vec![U, U, 0]]);
        f.relax(Metric::Uniform8);
        assert_eq!(f.to_rows(), vec![vec![2, 2, 2], vec![2, 1, 1], vec![2, 1, 0]]);
    }

    #[test]
    fn euclidean_octile_distances() {
        let u = f64::DEFAULT_UNREACHED;
        let mut f = Field::from_rows(
            &[vec![0.0, u, u], vec![u, u, u], vec![u, u, u]],
            Sentinels::default(),
        )
        .unwrap();
        f.relax(Metric::Euclidean8);
        let expect = [
            [0.0, 1.0, 2.0],
            [1.0, SQRT_2, 1.0 + SQRT_2],
            [2.0, 1.0 + SQRT_2, 2.0 * SQRT_2],
        ];
        for p in f.bounds() {
            let got = f.value(p).unwrap();
            let want = expect[p.row as usize][p.col as usize];
            assert!((got - want).abs() < 1e-9, "{p}: {got} != {want}");
        }
    }

    #[test]
    fn walls_block_and_stay() {
        let mut f = field(&[vec![0, B, U], vec![U, B, U], vec![U, U, U]]);
        f.relax(Metric::Cardinal);
        assert_eq!(f.to_rows(), vec![vec![0, B, 6], vec![1, B, 5], vec![2, 3, 4]]);
    }

    #[test]
    fn enclosed_cell_stays_unreached() {
        let mut f = field(&[vec![0, B, U], vec![U, B, U]]);
        f.relax(Metric::Cardinal);
        assert_eq!(f.to_rows(), vec![vec![0, B, U], vec![1, B, U]]);
        assert_eq!(f.unconnected(), vec![Point::new(0, 2), Point::new(1, 2)]);
    }

    #[test]
    fn negative_cells_keep_their_sign() {
        let mut f = field(&[vec![0, -U, -U, U]]);
        f.relax(Metric::Cardinal);
        assert_eq!(f.to_rows(), vec![vec![0, -1, -2, 3]]);
    }

    #[test]
    fn converged_field_is_stable() {
        let mut f = field(&[vec![U, U, U], vec![U, B, U], vec![U, U, 0]]);
        f.relax(Metric::Cardinal);
        let snapshot = f.clone();
        assert_eq!(f.relax(Metric::Cardinal), 1);
        assert_eq!(f, snapshot);
        assert_eq!(f.sweep(Metric::Cardinal), 0);
    }

    #[test]
    fn cardinal_does_not_cross_diagonal_gaps() {
        let mut f = field(&[vec![0, B], vec![B, U]]);
        f.relax(Metric::Cardinal);
        assert_eq!(f.value(Point::new(1, 1)).unwrap(), U);
        f.relax(Metric::Uniform8);
        assert_eq!(f.value(Point::new(1, 1)).unwrap(), 1);
    }

    #[test]
    fn custom_goal_value() {
        let s = Sentinels {
            bad: -1000,
            goal: 10,
            unreached: 1000,
        };
        let mut f = Field::from_rows(&[[10i64, 1000, 1000]], s).unwrap();
        f.relax(Metric::Cardinal);
        assert_eq!(f.to_rows(), vec![vec![10, 11, 12]]);
    }
}
