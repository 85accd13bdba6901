//! Biased random walk that connects the start of a [`Grid`] to its goal

use crate::error::MapError;
use crate::grid::{Grid, Location};
use crate::settings::check_probability;
use log::{debug, trace, warn};
use rand::Rng;

/// The (at most two) moves that shrink the x gap and the y gap to `goal`, x first.
fn moves_toward(p: &Location, goal: &Location) -> Vec<Location> {
    let mut moves = Vec::with_capacity(2);
    if p.x != goal.x {
        moves.push(Location::new(step_toward(p.x, goal.x), p.y));
    }
    if p.y != goal.y {
        moves.push(Location::new(p.x, step_toward(p.y, goal.y)));
    }
    moves
}

fn step_toward(from: usize, to: usize) -> usize {
    if to > from {
        from + 1
    } else {
        from - 1
    }
}

/// The deterministic fallback: one step along x if x differs, otherwise along y.
fn forced_step(p: &Location, goal: &Location) -> Location {
    if p.x != goal.x {
        Location::new(step_toward(p.x, goal.x), p.y)
    } else {
        Location::new(p.x, step_toward(p.y, goal.y))
    }
}

/// Walks from the grid's start to its goal, returning every cell visited in order.
///
/// Each step, with probability `bias_probability`, only moves that close the gap to the goal are
/// proposed; otherwise every in-bounds neighbor is. Cells visited earlier are discarded, even
/// ones since erased from the path, and a random survivor is taken. If nothing survives, the
/// walk is forced one step toward the goal (x axis first). A forced step onto a cell still on the
/// path erases the loop it closes, so the result never repeats a cell.
///
/// Every unforced step lands on a new cell and every forced step shrinks the distance to the
/// goal, so the walk ends within `3 * width * height` steps.
///
/// Walls are ignored; this runs before any are placed. Fails with
/// [`MapError::InvalidConfiguration`] if `bias_probability` is not in `[0, 1]`, and with
/// [`MapError::GenerationStepBudgetExhausted`] if the goal is not reached within `step_budget`
/// steps.
///
/// # Examples
///
/// ```
/// use mazegen::grid::{Grid, Location};
/// use mazegen::path_gen::generate_path;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let grid = Grid::new(6, 6, Location::new(0, 0), Location::new(5, 5)).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let path = generate_path(&grid, 0.7, 108, &mut rng).unwrap();
/// assert_eq!(path.first(), Some(&Location::new(0, 0)));
/// assert_eq!(path.last(), Some(&Location::new(5, 5)));
/// ```
pub fn generate_path<R: Rng + ?Sized>(
    grid: &Grid,
    bias_probability: f64,
    step_budget: usize,
    rng: &mut R,
) -> Result<Vec<Location>, MapError> {
    check_probability("bias_probability", bias_probability)?;

    let start = grid.start();
    let goal = grid.goal();
    let index = |p: &Location| p.y * grid.width() + p.x;

    let mut path = vec![start];
    let mut visited = vec![false; grid.cell_count()];
    // position of each cell in `path`, if it is on it
    let mut path_index: Vec<Option<usize>> = vec![None; grid.cell_count()];
    visited[index(&start)] = true;
    path_index[index(&start)] = Some(0);

    let mut current = start;
    let mut steps = 0;
    while current != goal {
        if steps == step_budget {
            warn!(
                "Path generation gave up at {} after {} steps ({} from the goal)",
                current,
                steps,
                current.x.abs_diff(goal.x) + current.y.abs_diff(goal.y)
            );
            return Err(MapError::GenerationStepBudgetExhausted {
                steps,
                reached: current,
            });
        }
        steps += 1;

        let mut candidates = if rng.gen_bool(bias_probability) {
            moves_toward(&current, &goal)
        } else {
            // up, right, down, left
            grid.neighbors(&current)
        };
        candidates.retain(|c| !visited[index(c)]);

        let next = if candidates.is_empty() {
            forced_step(&current, &goal)
        } else {
            candidates[rng.gen_range(0..candidates.len())]
        };

        visited[index(&next)] = true;
        match path_index[index(&next)] {
            Some(i) => {
                trace!("Forced step onto {next} erases {} cells", path.len() - i - 1);
                for p in path.drain(i + 1..) {
                    path_index[index(&p)] = None;
                }
            }
            None => {
                path_index[index(&next)] = Some(path.len());
                path.push(next);
            }
        }
        current = next;
    }

    debug!(
        "Generated path of {} cells from {} to {} in {} steps",
        path.len(),
        start,
        goal,
        steps
    );
    for (i, p) in path.iter().enumerate() {
        trace!("index {i}: {p}");
    }
    Ok(path)
}
