//! Relaxation-based influence maps for grid pathfinding and steering.
//!
//! An influence map turns a sparse set of goal cells into a potential field
//! where every reachable cell holds its distance to the nearest goal. The
//! field is built by repeated whole-grid sweeps rather than a priority
//! queue, and agents then walk it downhill:
//!
//! - **Construction** from a symbol grid and a cost function ([`InfluenceMap::map`])
//! - **Relaxation** under one of three metrics ([`Metric`], [`Field::relax`])
//! - **Move queries** and randomized best-move selection ([`Field::moves`], [`Field::best_move`])
//! - **Greedy paths** down the gradient ([`Field::path`])
//! - **Weighted combination** with veto semantics ([`Field::combine`], [`Field::best_combined_move`])
//!
//! Cell values keep their sign through relaxation, so a field can carry
//! repulsive (negative) regions alongside attractive ones. The cardinal
//! metric never connects regions that touch only at a corner, even if the
//! configured move adjacency later allows a diagonal step between them.
//!
//! # Example
//!
//! ```
//! use influence_map::{InfluenceMap, MapConfig, parse_grid};
//!
//! let mut map = InfluenceMap::<i64>::with_default_cost(MapConfig::default());
//! let field = map.map(&parse_grid("...\n...\n..x", "\n")).unwrap();
//! assert_eq!(field.to_rows(), vec![vec![4, 3, 2], vec![3, 2, 1], vec![2, 1, 0]]);
//! assert_eq!(map.iterations(), 5);
//! ```

mod adjacency;
mod combine;
mod config;
mod error;
mod field;
mod influence;
mod moves;
mod relax;
pub mod text;

pub use adjacency::{Adjacency, Metric, Neighbors};
pub use config::{MapConfig, Sentinels};
pub use error::MapError;
pub use field::Field;
pub use influence::{DefaultCostFn, InfluenceMap};
pub use influence_core::{Bounds, Cost, Grid, GridError, Point};
pub use text::{default_cost, parse_grid, serialize_grid};
