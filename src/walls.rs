//! Random obstacle placement

use crate::error::MapError;
use crate::grid::{Grid, Location};
use crate::settings::check_probability;
use log::debug;
use rand::Rng;

/// Turns each unprotected cell into a wall with probability `wall_probability`.
///
/// The start, the goal and every cell of `protected_path` are left open, so the path stays
/// walkable. Cells are visited row-major and a random draw is taken only for cells that are
/// eligible, so a seeded `rng` always gives the same layout. Returns the number of walls placed,
/// or [`MapError::InvalidConfiguration`] without touching the grid if `wall_probability` is not
/// in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use mazegen::grid::{Grid, Location};
/// use mazegen::walls::place_walls;
///
/// let mut grid = Grid::new(3, 1, Location::new(0, 0), Location::new(2, 0)).unwrap();
/// let placed = place_walls(&mut grid, &[], 1.0, &mut rand::thread_rng()).unwrap();
/// assert_eq!(placed, 1);
/// assert!(grid.is_wall(&Location::new(1, 0)));
/// ```
pub fn place_walls<R: Rng + ?Sized>(
    grid: &mut Grid,
    protected_path: &[Location],
    wall_probability: f64,
    rng: &mut R,
) -> Result<usize, MapError> {
    check_probability("wall_probability", wall_probability)?;

    let mut protected = vec![false; grid.cell_count()];
    for p in protected_path {
        if let Some(i) = grid.index_of(p) {
            protected[i] = true;
        }
    }

    let mut placed = 0;
    let mut candidates = 0;
    for i in 0..grid.cell_count() {
        let p = grid.location_of(i);
        if protected[i] || grid.is_protected(&p) {
            continue;
        }
        candidates += 1;
        let wall = rng.gen_bool(wall_probability);
        // start and goal were skipped above
        if grid.set_wall(&p, wall).is_ok() && wall {
            placed += 1;
        }
    }

    debug!("Placed {placed} walls on {candidates} candidate cells");
    Ok(placed)
}
