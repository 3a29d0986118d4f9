//! [`InfluenceMap`]: owns a field, builds it from symbols and keeps it
//! current.

use std::marker::PhantomData;

use influence_core::{Cost, Grid, Point};
use rand::Rng;

use crate::config::{MapConfig, Sentinels};
use crate::error::MapError;
use crate::field::Field;
use crate::text::default_cost;

/// Cost function signature used by [`InfluenceMap::with_default_cost`].
pub type DefaultCostFn<T> = fn(&Sentinels<T>, &char) -> T;

/// An influence map over symbols of type `S`.
///
/// `F` maps each symbol to a raw cost; it receives the map's sentinels so
/// it can hand out the impassable, goal and unreached markers. The map
/// holds no field until [`map`](Self::map) succeeds, and every query before
/// that fails with [`MapError::State`].
///
/// The map is not synchronised: callers serialise access themselves.
pub struct InfluenceMap<T, S = char, F = DefaultCostFn<T>> {
    config: MapConfig<T>,
    cost_fn: F,
    field: Option<Field<T>>,
    iterations: usize,
    _symbol: PhantomData<fn(&S)>,
}

impl<T: Cost> InfluenceMap<T> {
    /// A map over characters using [`default_cost`].
    pub fn with_default_cost(config: MapConfig<T>) -> Self {
        Self::new(config, default_cost::<T> as DefaultCostFn<T>)
    }
}

impl<T, S, F> InfluenceMap<T, S, F>
where
    T: Cost,
    F: Fn(&Sentinels<T>, &S) -> T,
{
    /// Create a map with no field yet.
    pub fn new(config: MapConfig<T>, cost_fn: F) -> Self {
        Self {
            config,
            cost_fn,
            field: None,
            iterations: 0,
            _symbol: PhantomData,
        }
    }

    /// The configuration.
    #[inline]
    pub fn config(&self) -> &MapConfig<T> {
        &self.config
    }

    /// Sweeps used by the last [`map`](Self::map) or
    /// [`recalc`](Self::recalc), or 0 if neither has run.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The current field.
    pub fn field(&self) -> Result<&Field<T>, MapError> {
        self.field.as_ref().ok_or(MapError::State)
    }

    /// A deep copy of the current field.
    pub fn clone_field(&self) -> Result<Field<T>, MapError> {
        self.field().cloned()
    }

    /// Build a new field from a grid of symbols and relax it.
    ///
    /// The grid must be non-empty and rectangular. On success the new field
    /// replaces any previous one; on error the previous field is kept.
    pub fn map<R: AsRef<[S]>>(&mut self, symbols: &[R]) -> Result<&Field<T>, MapError> {
        self.config.validate()?;
        let sentinels = self.config.sentinels;
        let costs: Vec<Vec<T>> = symbols
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|sym| (self.cost_fn)(&sentinels, sym))
                    .collect()
            })
            .collect();
        let mut field = Field::from_grid(Grid::from_rows(&costs)?, sentinels);
        self.iterations = field.relax(self.config.metric);
        log::debug!(
            "built {} field in {} sweeps",
            field.bounds(),
            self.iterations
        );
        Ok(&*self.field.insert(field))
    }

    /// Write `(point, value)` entries into the field without relaxing.
    ///
    /// Call [`recalc`](Self::recalc) afterwards if the change should
    /// propagate.
    pub fn update(&mut self, entries: &[(Point, T)]) -> Result<(), MapError> {
        self.field.as_mut().ok_or(MapError::State)?.update(entries)
    }

    /// Reset every cell that is neither impassable nor a goal to
    /// `unreached` and relax again from scratch. Returns the sweep count.
    pub fn recalc(&mut self) -> Result<usize, MapError> {
        self.config.validate()?;
        let metric = self.config.metric;
        let field = self.field.as_mut().ok_or(MapError::State)?;
        field.reset();
        let sweeps = field.relax(metric);
        log::debug!("recalculated {} field in {sweeps} sweeps", field.bounds());
        self.iterations = sweeps;
        Ok(sweeps)
    }

    /// Downhill neighbours of `p` under the configured move adjacency.
    pub fn moves(&self, p: Point, value: Option<T>) -> Result<Vec<(Point, T)>, MapError> {
        self.field()?.moves(p, value, self.config.moves)
    }

    /// The best next step from `p`, ties broken by `rng`.
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        p: Point,
        rng: &mut R,
    ) -> Result<Option<Point>, MapError> {
        self.field()?.best_move(p, self.config.moves, rng)
    }

    /// Greedy descent from `start`, excluding `start`.
    pub fn path<R: Rng + ?Sized>(&self, start: Point, rng: &mut R) -> Result<Vec<Point>, MapError> {
        self.field()?.path(start, self.config.moves, rng)
    }

    /// Weighted composite of this map's field and `others`.
    pub fn combine(
        &self,
        others: &[&Field<T>],
        weights: &[T],
        own_weight: T,
    ) -> Result<Field<T>, MapError> {
        self.field()?.combine(others, weights, own_weight)
    }

    /// Best next step from `p` on the weighted composite.
    pub fn best_combined_move<R: Rng + ?Sized>(
        &self,
        p: Point,
        others: &[&Field<T>],
        weights: &[T],
        own_weight: T,
        rng: &mut R,
    ) -> Result<Option<Point>, MapError> {
        self.field()?
            .best_combined_move(p, others, weights, own_weight, self.config.moves, rng)
    }
}
