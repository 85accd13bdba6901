//! Error types for grid construction and map generation.

use crate::grid::Location;
use thiserror::Error;

/// Errors from building or editing a [`Grid`](crate::grid::Grid).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GridError {
    /// Width or height is zero
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// A location lies outside the grid
    #[error("location {0} is outside the grid")]
    OutOfBounds(Location),
    /// The start or goal cell can never change state
    #[error("location {0} is the start or goal and cannot be edited")]
    ProtectedCell(Location),
    /// An ASCII layout could not be parsed
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Outcomes of a map generation cycle that are not a finished map.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MapError {
    /// The settings were rejected before any state was built
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The random walk ran out of steps before reaching the goal
    #[error("path generation used all {steps} steps and stopped at {reached}")]
    GenerationStepBudgetExhausted {
        /// The step budget that was used up
        steps: usize,
        /// Where the walk was when it gave up
        reached: Location,
    },
    /// The walls separate the start from the goal
    #[error("no path from {start} to {end}")]
    Unreachable {
        /// Search origin
        start: Location,
        /// Search target
        end: Location,
    },
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        MapError::InvalidConfiguration(e.to_string())
    }
}
