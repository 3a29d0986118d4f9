use influence_core::{Bounds, Cost, Point};

/// Which neighbours of a cell are considered.
///
/// Neighbours outside the grid are dropped; nothing wraps around. The order
/// of the returned neighbours is not part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// North, east, south and west.
    #[default]
    Cardinal,
    /// The four corners.
    Diagonal,
    /// Cardinal and diagonal together.
    All,
}

/// Distance metric driving relaxation: an adjacency plus an edge-weight and
/// threshold policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// 4-way, every step costs 1.
    #[default]
    Cardinal,
    /// 8-way, every step costs 1 (Chebyshev).
    Uniform8,
    /// 8-way, cardinal steps cost 1 and diagonal steps cost √2 (octile).
    Euclidean8,
}

impl Metric {
    /// The neighbour set relaxation scans under this metric.
    #[inline]
    pub fn adjacency(self) -> Adjacency {
        match self {
            Metric::Cardinal => Adjacency::Cardinal,
            Metric::Uniform8 | Metric::Euclidean8 => Adjacency::All,
        }
    }

    /// Whether edges carry individual weights.
    #[inline]
    pub fn is_weighted(self) -> bool {
        self == Metric::Euclidean8
    }

    /// Cost of stepping from `from` to the adjacent cell `to`.
    #[inline]
    pub fn edge_weight<T: Cost>(self, from: Point, to: Point) -> T {
        if self.is_weighted() && from.is_diagonal_to(to) {
            T::from_f64(std::f64::consts::SQRT_2)
        } else {
            T::ONE
        }
    }
}

/// Cached neighbour computation helper.
///
/// Reuses one buffer so that the relaxation sweep does not allocate per
/// cell.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Up to 4 in-bounds cardinal neighbours of `p`.
    pub fn cardinal(&mut self, p: Point, bounds: Bounds) -> &[Point] {
        self.buf.clear();
        self.push_in(p.cardinals(), bounds);
        &self.buf
    }

    /// Up to 4 in-bounds corner neighbours of `p`.
    pub fn diagonal(&mut self, p: Point, bounds: Bounds) -> &[Point] {
        self.buf.clear();
        self.push_in(p.diagonals(), bounds);
        &self.buf
    }

    /// Up to 8 in-bounds neighbours of `p`.
    pub fn all(&mut self, p: Point, bounds: Bounds) -> &[Point] {
        self.buf.clear();
        self.push_in(p.cardinals(), bounds);
        self.push_in(p.diagonals(), bounds);
        &self.buf
    }

    /// Neighbours of `p` under `adjacency`.
    pub fn of(&mut self, adjacency: Adjacency, p: Point, bounds: Bounds) -> &[Point] {
        match adjacency {
            Adjacency::Cardinal => self.cardinal(p, bounds),
            Adjacency::Diagonal => self.diagonal(p, bounds),
            Adjacency::All => self.all(p, bounds),
        }
    }

    fn push_in(&mut self, candidates: [Point; 4], bounds: Bounds) {
        self.buf
            .extend(candidates.into_iter().filter(|&n| bounds.contains(n)));
    }
}
