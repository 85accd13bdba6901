#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made layouts for [`Grid::parse`](crate::grid::Grid::parse)
//!
//! ```
//! use mazegen::grid::Grid;
//! use mazegen::grid::standard_grids::GRID_CORRIDOR;
//!
//! let grid = Grid::parse(GRID_CORRIDOR).unwrap();
//! ```

/// A single-width corridor that snakes from the bottom left to the top left
pub const GRID_CORRIDOR: &str = "
    G######
    .######
    .......
    ######.
    S......
";

/// A 5x5 grid with no walls
pub const GRID_OPEN: &str = "
    ....G
    .....
    .....
    .....
    S....
";

/// The goal is walled off from the start
pub const GRID_SEALED: &str = "
    ...#G
    ...##
    .....
    .....
    S....
";
