//! Defaults for map generation

use crate::grid::Location;

/// Default grid width
pub const DEFAULT_WIDTH: usize = 10;
/// Default grid height
pub const DEFAULT_HEIGHT: usize = 10;
/// Default start cell
pub const DEFAULT_START: Location = Location::new(0, 0);
/// Default goal cell
pub const DEFAULT_END: Location = Location::new(DEFAULT_WIDTH - 1, DEFAULT_HEIGHT - 1);

/// Chance that a generation step only considers moves toward the goal
///
/// Higher values give straighter, shorter generation paths; lower values give longer, more
/// winding ones.
pub const DEFAULT_BIAS_PROBABILITY: f64 = 0.7;
/// Chance that an unprotected cell becomes a wall
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;
/// The generation step budget is this many times the number of cells
pub const DEFAULT_STEP_BUDGET_MULTIPLIER: usize = 3;
