//! Sentinel values and map configuration.

use influence_core::Cost;

use crate::adjacency::{Adjacency, Metric};

/// The three marker values a field reserves.
///
/// `bad` cells are impassable, `goal` cells are the sources every distance
/// is measured from, and `unreached` is the floor value a cell keeps until
/// relaxation connects it to a goal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentinels<T> {
    pub bad: T,
    pub goal: T,
    pub unreached: T,
}

impl<T: Cost> Default for Sentinels<T> {
    fn default() -> Self {
        Self {
            bad: T::DEFAULT_BAD,
            goal: T::DEFAULT_GOAL,
            unreached: T::DEFAULT_UNREACHED,
        }
    }
}

impl<T: Cost> Sentinels<T> {
    /// Whether relaxation must leave `v` alone (impassable or goal).
    #[inline]
    pub fn is_fixed(&self, v: T) -> bool {
        v == self.bad || v == self.goal
    }

    /// Whether `v` is one of the three markers.
    #[inline]
    pub fn is_sentinel(&self, v: T) -> bool {
        self.is_fixed(v) || v == self.unreached
    }
}

/// Configuration for an [`InfluenceMap`](crate::InfluenceMap).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapConfig<T> {
    /// Marker values.
    pub sentinels: Sentinels<T>,
    /// Distance metric used by relaxation.
    pub metric: Metric,
    /// Neighbour set used by move queries, best-move selection and path
    /// extraction. Independent of `metric`.
    pub moves: Adjacency,
}

impl<T: Cost> Default for MapConfig<T> {
    fn default() -> Self {
        Self {
            sentinels: Sentinels::default(),
            metric: Metric::Cardinal,
            moves: Adjacency::Cardinal,
        }
    }
}

impl<T: Cost> MapConfig<T> {
    /// Use `metric` for relaxation.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Use `moves` for move queries.
    pub fn with_moves(mut self, moves: Adjacency) -> Self {
        self.moves = moves;
        self
    }

    /// Replace the marker values.
    pub fn with_sentinels(mut self, sentinels: Sentinels<T>) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Check that the metric can be represented by the cost type.
    pub fn validate(&self) -> Result<(), crate::MapError> {
        if T::INTEGRAL && self.metric == Metric::Euclidean8 {
            return Err(crate::MapError::Config(
                "the Euclidean metric needs a floating-point cost type",
            ));
        }
        Ok(())
    }
}
