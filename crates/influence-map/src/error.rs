//! Error type for influence-map operations.

use std::fmt;

use influence_core::{Bounds, GridError, Point};

/// Errors raised by field construction, queries and mutation.
///
/// Every operation that returns one of these has left the field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The input grid is empty, ragged, or does not match another field's
    /// shape.
    Shape(GridError),
    /// The operation needs a field but none has been constructed yet.
    State,
    /// A point outside `[0, max_row] x [0, max_col]`.
    Bounds { pos: Point, bounds: Bounds },
    /// A value that is not a usable number (NaN).
    Value { pos: Point },
    /// The configuration cannot be used with this cost type.
    Config(&'static str),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "bad field shape: {e}"),
            Self::State => write!(f, "no field has been constructed yet"),
            Self::Bounds { pos, bounds } => {
                write!(f, "point {pos} is outside field bounds {bounds}")
            }
            Self::Value { pos } => write!(f, "value for {pos} is not a number"),
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::OutOfBounds { pos, bounds } => Self::Bounds { pos, bounds },
            other => Self::Shape(other),
        }
    }
}
