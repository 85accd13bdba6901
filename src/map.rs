//! One full generation cycle: grid, generation path, walls, search path

use crate::error::MapError;
use crate::grid::{Grid, Location};
use crate::path_gen::generate_path;
use crate::pathing::find_shortest_path_with_stats;
use crate::settings::MapSettings;
use crate::walls::place_walls;
use anyhow::{anyhow, Error};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashSet;

/// What a cell of a [`GeneratedMap`] is, for display purposes
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum CellKind {
    /// The start cell
    Start,
    /// The goal cell
    Goal,
    /// An obstacle
    Wall,
    /// On both the generation path and the search path
    SharedPath,
    /// Only on the generation path
    GenerationPath,
    /// Only on the search path
    SearchPath,
    /// Anything else
    Empty,
}

/// The result of a successful generation cycle
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GeneratedMap {
    grid: Grid,
    generation_path: Vec<Location>,
    search_path: Vec<Location>,
}

impl GeneratedMap {
    /// The grid, walls included
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The random walk that guarantees the start and goal are connected
    pub fn generation_path(&self) -> &[Location] {
        &self.generation_path
    }

    /// A shortest path through the finished grid
    pub fn search_path(&self) -> &[Location] {
        &self.search_path
    }

    /// How many fewer cells the search path visits than the generation path
    pub fn savings(&self) -> usize {
        self.generation_path.len() - self.search_path.len()
    }

    /// Classifies a location; `None` if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::grid::Location;
    /// use mazegen::map::{generate_map, CellKind};
    /// use mazegen::settings::MapSettings;
    ///
    /// let settings = MapSettings::default().with_seed(1);
    /// let map = generate_map(&settings).unwrap();
    /// assert_eq!(map.cell_kind(&settings.start), Some(CellKind::Start));
    /// assert_eq!(map.cell_kind(&Location::new(99, 0)), None);
    /// ```
    pub fn cell_kind(&self, p: &Location) -> Option<CellKind> {
        self.grid.at(p)?;
        let on_generation = self.generation_path.contains(p);
        let on_search = self.search_path.contains(p);
        Some(if *p == self.grid.start() {
            CellKind::Start
        } else if *p == self.grid.goal() {
            CellKind::Goal
        } else if self.grid.is_wall(p) {
            CellKind::Wall
        } else if on_generation && on_search {
            CellKind::SharedPath
        } else if on_generation {
            CellKind::GenerationPath
        } else if on_search {
            CellKind::SearchPath
        } else {
            CellKind::Empty
        })
    }
}

/// Checks that `path` runs from `start` to `end` through adjacent, distinct, open cells.
pub fn validate_path(
    grid: &Grid,
    path: &[Location],
    start: Location,
    end: Location,
) -> Result<(), Error> {
    match (path.first(), path.last()) {
        (Some(first), Some(last)) => {
            if *first != start {
                return Err(anyhow!("Path starts at {} instead of {}", first, start));
            }
            if *last != end {
                return Err(anyhow!("Path ends at {} instead of {}", last, end));
            }
        }
        _ => return Err(anyhow!("Path is empty")),
    }

    let mut seen = HashSet::new();
    for (i, p) in path.iter().enumerate() {
        if !grid.in_bounds(p) {
            return Err(anyhow!("Path index {} at {} is out of bounds", i, p));
        }
        if grid.is_wall(p) {
            return Err(anyhow!("Path index {} at {} is a wall", i, p));
        }
        if !seen.insert(*p) {
            return Err(anyhow!("Path visits {} more than once", p));
        }
        if i > 0 && !path[i - 1].is_adjacent(p) {
            return Err(anyhow!(
                "Path index {} at {} is not adjacent to {}",
                i,
                p,
                path[i - 1]
            ));
        }
    }
    Ok(())
}

/// Runs a full generation cycle with an RNG seeded from `settings.seed`, or from entropy if there
/// is none.
///
/// # Examples
///
/// ```
/// use mazegen::grid::Location;
/// use mazegen::map::generate_map;
/// use mazegen::settings::MapSettings;
///
/// let settings = MapSettings::new(8, 8, Location::new(0, 0), Location::new(7, 7)).with_seed(3);
/// let map = generate_map(&settings).unwrap();
/// assert!(map.search_path().len() <= map.generation_path().len());
/// ```
pub fn generate_map(settings: &MapSettings) -> Result<GeneratedMap, MapError> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_map_with_rng(settings, &mut rng)
}

/// Runs a full generation cycle drawing randomness from `rng`.
///
/// Builds a fresh grid, walks a generation path from start to end, scatters walls off that path,
/// then searches the result for a shortest path. Any failure is returned instead of a partial map.
pub fn generate_map_with_rng<R: Rng + ?Sized>(
    settings: &MapSettings,
    rng: &mut R,
) -> Result<GeneratedMap, MapError> {
    settings.validate()?;

    let mut grid = Grid::new(settings.width, settings.height, settings.start, settings.end)?;
    let generation_path = generate_path(
        &grid,
        settings.bias_probability,
        settings.step_budget(),
        rng,
    )?;
    let walls = place_walls(&mut grid, &generation_path, settings.wall_probability, rng)?;

    let (search_path, stats) = find_shortest_path_with_stats(&grid, settings.start, settings.end);
    let Some(search_path) = search_path else {
        warn!(
            "No path from {} to {} after placing {} walls",
            settings.start, settings.end, walls
        );
        return Err(MapError::Unreachable {
            start: settings.start,
            end: settings.end,
        });
    };
    debug!(
        "Search expanded {} cells, pushed {}",
        stats.expanded, stats.pushed
    );

    debug_assert!(validate_path(&grid, &generation_path, settings.start, settings.end).is_ok());
    debug_assert!(validate_path(&grid, &search_path, settings.start, settings.end).is_ok());

    let map = GeneratedMap {
        grid,
        generation_path,
        search_path,
    };
    info!(
        "Map generated: {}x{}, {} walls, generation path {} cells, A* path {} cells ({} fewer)",
        settings.width,
        settings.height,
        walls,
        map.generation_path.len(),
        map.search_path.len(),
        map.savings()
    );
    Ok(map)
}
