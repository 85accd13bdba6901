//! Shortest paths over a [`Grid`] with A*

use crate::grid::{Grid, Location};
use log::trace;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Cost of an unreached cell
const UNREACHED: u32 = u32::MAX;

/// Manhattan distance, the A* heuristic for 4-directional unit-cost movement.
///
/// # Examples
///
/// ```
/// use mazegen::grid::Location;
/// use mazegen::pathing::heuristic;
///
/// assert_eq!(heuristic(&Location::new(1, 5), &Location::new(4, 2)), 6);
/// ```
pub fn heuristic(a: &Location, b: &Location) -> u32 {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as u32
}

/// Counters from one search
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Cells taken off the frontier and expanded
    pub expanded: usize,
    /// Entries pushed onto the frontier, including the start
    pub pushed: usize,
}

/// A frontier entry. Ordered so that [`BinaryHeap`] pops the lowest `f_score`, and among equal
/// scores the entry pushed first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FrontierEntry {
    f_score: u32,
    g_score: u32,
    order: usize,
    index: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a shortest 4-directional path from `start` to `end` that avoids walls.
///
/// Returns `None` if no such path exists, including when either endpoint is out of bounds or a
/// wall. The returned path includes both endpoints.
///
/// # Examples
///
/// ```
/// use mazegen::grid::{Grid, Location};
/// use mazegen::pathing::find_shortest_path;
///
/// let grid = Grid::parse(
///     "
///     ...G
///     .##.
///     S...
///     ",
/// )
/// .unwrap();
/// let path = find_shortest_path(&grid, grid.start(), grid.goal()).unwrap();
/// assert_eq!(path.len(), 6);
/// ```
pub fn find_shortest_path(grid: &Grid, start: Location, end: Location) -> Option<Vec<Location>> {
    find_shortest_path_with_stats(grid, start, end).0
}

/// [`find_shortest_path`], also returning how much work the search did.
pub fn find_shortest_path_with_stats(
    grid: &Grid,
    start: Location,
    end: Location,
) -> (Option<Vec<Location>>, SearchStats) {
    let mut stats = SearchStats::default();
    let (Some(start_index), Some(end_index)) = (grid.index_of(&start), grid.index_of(&end)) else {
        return (None, stats);
    };
    if grid.is_wall(&start) || grid.is_wall(&end) {
        return (None, stats);
    }

    let mut g_score = vec![UNREACHED; grid.cell_count()];
    let mut came_from: Vec<Option<usize>> = vec![None; grid.cell_count()];
    let mut frontier = BinaryHeap::new();

    g_score[start_index] = 0;
    frontier.push(FrontierEntry {
        f_score: heuristic(&start, &end),
        g_score: 0,
        order: 0,
        index: start_index,
    });
    stats.pushed = 1;

    while let Some(entry) = frontier.pop() {
        // a better route to this cell was found after this entry was pushed
        if entry.g_score != g_score[entry.index] {
            continue;
        }
        if entry.index == end_index {
            let mut path = vec![end];
            let mut next = end_index;
            while let Some(before) = came_from[next] {
                path.push(grid.location_of(before));
                next = before;
            }
            path.reverse();
            trace!(
                "A* found {} cells from {} to {}, expanded {}",
                path.len(),
                start,
                end,
                stats.expanded
            );
            return (Some(path), stats);
        }
        stats.expanded += 1;

        let current = grid.location_of(entry.index);
        let tentative_g = entry.g_score + 1;
        for neighbor in grid.open_neighbors(&current) {
            let i = neighbor.y * grid.width() + neighbor.x;
            if tentative_g < g_score[i] {
                came_from[i] = Some(entry.index);
                g_score[i] = tentative_g;
                frontier.push(FrontierEntry {
                    f_score: tentative_g + heuristic(&neighbor, &end),
                    g_score: tentative_g,
                    order: stats.pushed,
                    index: i,
                });
                stats.pushed += 1;
            }
        }
    }

    trace!(
        "A* found no path from {} to {}, expanded {}",
        start,
        end,
        stats.expanded
    );
    (None, stats)
}
