//! **influence-core**: grid types shared by the influence-map algorithms.
//!
//! This crate provides the geometry primitives ([`Point`], [`Bounds`]), the
//! numeric [`Cost`] trait implemented for the integer and float types a
//! field can hold, and the owned rectangular [`Grid`] matrix.

pub mod cost;
pub mod geom;
pub mod grid;

pub use cost::Cost;
pub use geom::{Bounds, BoundsIter, Point};
pub use grid::{Grid, GridError};
