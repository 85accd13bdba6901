//! Logical grid structs and utilities.

use crate::error::GridError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod standard_grids;

/// An integer location on the grid
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Location {
    /// Column - increases to the right
    pub x: usize,
    /// Row - increases upwards
    pub y: usize,
}

impl Location {
    /// Create a new Location
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns whether `other` is exactly one step away along one axis.
    pub fn is_adjacent(&self, other: &Location) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Location {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Enum for direction values.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// +y
    Up = 0,
    /// +x
    Right = 1,
    /// -y
    Down = 2,
    /// -x
    Left = 3,
}

impl Direction {
    /// All directions in neighbor enumeration order.
    ///
    /// Search tie-breaking depends on this order, so it must not change.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// Enum for [`Grid`] cell values.
///
/// Each variant is backed by the byte used for it in text layouts.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum CellState {
    /// Open space
    #[default]
    Empty = b'.',
    /// Obstacle
    Wall = b'#',
}

impl CellState {
    /// Returns whether this [`CellState`] is walkable.
    pub fn walkable(self) -> bool {
        self != CellState::Wall
    }
}

/// A fixed-size 2D grid of [`CellState`]s with a designated start and goal.
///
/// Cells are stored row-major in a single vector indexed by `y * width + x`.
/// The start and goal are never walls.
///
/// # Examples
///
/// ```
/// use mazegen::grid::{Grid, Location};
///
/// let grid = Grid::new(5, 5, Location::new(0, 0), Location::new(4, 4)).unwrap();
/// assert_eq!(grid.wall_count(), 0);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    start: Location,
    goal: Location,
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub fn new(
        width: usize,
        height: usize,
        start: Location,
        goal: Location,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let grid = Self {
            width,
            height,
            cells: vec![CellState::Empty; width * height],
            start,
            goal,
        };
        for p in [start, goal] {
            if !grid.in_bounds(&p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        Ok(grid)
    }

    /// Builds a grid from an ASCII layout.
    ///
    /// `#` is a wall, `.` is empty, `S` is the start and `G` is the goal. The first line is the
    /// top row (highest `y`). Blank lines and surrounding whitespace are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::grid::{Grid, Location};
    ///
    /// let grid = Grid::parse(
    ///     "
    ///     ..G
    ///     .#.
    ///     S..
    ///     ",
    /// )
    /// .unwrap();
    /// assert_eq!(grid.start(), Location::new(0, 0));
    /// assert_eq!(grid.goal(), Location::new(2, 2));
    /// assert!(grid.is_wall(&Location::new(1, 1)));
    /// ```
    pub fn parse(layout: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let mut cells = vec![CellState::Empty; width * height];
        let mut start = None;
        let mut goal = None;
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    row_index,
                    row.len(),
                    width
                )));
            }
            let y = height - 1 - row_index;
            for (x, byte) in row.bytes().enumerate() {
                let p = Location::new(x, y);
                let marker = match byte {
                    b'S' => &mut start,
                    b'G' => &mut goal,
                    _ => {
                        cells[y * width + x] = CellState::try_from(byte).map_err(|_| {
                            GridError::InvalidLayout(format!(
                                "unknown cell {:?} at {}",
                                byte as char, p
                            ))
                        })?;
                        continue;
                    }
                };
                if marker.replace(p).is_some() {
                    return Err(GridError::InvalidLayout(format!(
                        "more than one {:?}",
                        byte as char
                    )));
                }
            }
        }

        let start = start.ok_or(GridError::InvalidLayout("no start 'S'".to_string()))?;
        let goal = goal.ok_or(GridError::InvalidLayout("no goal 'G'".to_string()))?;
        Ok(Self {
            width,
            height,
            cells,
            start,
            goal,
        })
    }

    /// Width of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid
    pub fn height(&self) -> usize {
        self.height
    }

    /// The designated start cell
    pub fn start(&self) -> Location {
        self.start
    }

    /// The designated goal cell
    pub fn goal(&self) -> Location {
        self.goal
    }

    /// Returns whether the location is the start or the goal.
    pub fn is_protected(&self, p: &Location) -> bool {
        *p == self.start || *p == self.goal
    }

    /// Returns whether the location is inside the grid.
    pub fn in_bounds(&self, p: &Location) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Returns the packed index of the location, or `None` if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::grid::{Grid, Location};
    ///
    /// let grid = Grid::new(4, 3, Location::new(0, 0), Location::new(3, 2)).unwrap();
    /// assert_eq!(grid.index_of(&Location::new(1, 2)), Some(9));
    /// assert_eq!(grid.index_of(&Location::new(4, 0)), None);
    /// ```
    pub fn index_of(&self, p: &Location) -> Option<usize> {
        self.in_bounds(p).then(|| p.y * self.width + p.x)
    }

    /// Inverse of [`Grid::index_of`].
    pub fn location_of(&self, index: usize) -> Location {
        Location::new(index % self.width, index / self.width)
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the [`CellState`] at the given position, or `None` if the position is out of bounds.
    pub fn at(&self, p: &Location) -> Option<CellState> {
        self.index_of(p).map(|i| self.cells[i])
    }

    /// Returns whether the location is an in-bounds wall.
    pub fn is_wall(&self, p: &Location) -> bool {
        self.at(p) == Some(CellState::Wall)
    }

    /// Marks or clears a wall.
    ///
    /// The start and goal can never be edited; attempting to do so fails with
    /// [`GridError::ProtectedCell`] and leaves the grid unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::error::GridError;
    /// use mazegen::grid::{Grid, Location};
    ///
    /// let mut grid = Grid::new(3, 3, Location::new(0, 0), Location::new(2, 2)).unwrap();
    /// grid.set_wall(&Location::new(1, 1), true).unwrap();
    /// assert!(grid.is_wall(&Location::new(1, 1)));
    /// assert_eq!(
    ///     grid.set_wall(&Location::new(0, 0), true),
    ///     Err(GridError::ProtectedCell(Location::new(0, 0)))
    /// );
    /// ```
    pub fn set_wall(&mut self, p: &Location, wall: bool) -> Result<(), GridError> {
        let index = self.index_of(p).ok_or(GridError::OutOfBounds(*p))?;
        if self.is_protected(p) {
            return Err(GridError::ProtectedCell(*p));
        }
        self.cells[index] = if wall {
            CellState::Wall
        } else {
            CellState::Empty
        };
        Ok(())
    }

    /// Number of wall cells
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.walkable()).count()
    }

    /// Iterates over all locations in row-major order (by `y`, then `x`).
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.cells.len()).map(|i| self.location_of(i))
    }

    /// Returns the [`Location`] in the given direction from the given position, or `None` if the
    /// result is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazegen::grid::{Direction, Grid, Location};
    ///
    /// let grid = Grid::new(3, 3, Location::new(0, 0), Location::new(2, 2)).unwrap();
    /// assert_eq!(grid.next(&Location::new(1, 1), Direction::Up), Some(Location::new(1, 2)));
    /// assert_eq!(grid.next(&Location::new(0, 0), Direction::Left), None);
    /// ```
    pub fn next(&self, p: &Location, direction: Direction) -> Option<Location> {
        let n = match direction {
            Direction::Up => Location::new(p.x, p.y.checked_add(1)?),
            Direction::Right => Location::new(p.x.checked_add(1)?, p.y),
            Direction::Down => Location::new(p.x, p.y.checked_sub(1)?),
            Direction::Left => Location::new(p.x.checked_sub(1)?, p.y),
        };
        self.in_bounds(&n).then_some(n)
    }

    /// Returns the in-bounds neighbors of the given position, walls included.
    ///
    /// The order is always up, right, down, left.
    pub fn neighbors(&self, p: &Location) -> Vec<Location> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.next(p, d))
            .collect()
    }

    /// Returns the walkable neighbors of the given position, in [`Grid::neighbors`] order.
    pub fn open_neighbors(&self, p: &Location) -> Vec<Location> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.next(p, d))
            .filter(|n| !self.is_wall(n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_grids::*;

    fn blank(width: usize, height: usize) -> Grid {
        Grid::new(
            width,
            height,
            Location::new(0, 0),
            Location::new(width - 1, height - 1),
        )
        .unwrap()
    }

    #[test]
    fn next_at_extreme_coordinates() {
        let grid = blank(3, 3);
        let far = Location::new(usize::MAX, usize::MAX);
        for d in Direction::ALL {
            assert_eq!(grid.next(&far, d), None);
        }
        assert!(grid.neighbors(&far).is_empty());
        assert_eq!(grid.next(&Location::new(2, 2), Direction::Right), None);
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = blank(4, 6);
        assert_eq!(grid.cell_count(), 24);
        assert_eq!(grid.wall_count(), 0);
        assert!(grid.locations().all(|p| grid.at(&p) == Some(CellState::Empty)));
    }

    #[test]
    fn new_grid_rejects_bad_input() {
        assert_eq!(
            Grid::new(0, 3, Location::new(0, 0), Location::new(0, 0)),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            Grid::new(3, 3, Location::new(3, 0), Location::new(0, 0)),
            Err(GridError::OutOfBounds(Location::new(3, 0)))
        );
        assert_eq!(
            Grid::new(3, 3, Location::new(0, 0), Location::new(1, 5)),
            Err(GridError::OutOfBounds(Location::new(1, 5)))
        );
    }

    #[test]
    fn index_round_trip() {
        let grid = blank(7, 3);
        for (i, p) in grid.locations().enumerate() {
            assert_eq!(grid.index_of(&p), Some(i));
            assert_eq!(grid.location_of(i), p);
        }
    }

    #[test]
    fn locations_are_row_major() {
        let grid = blank(2, 2);
        let all: Vec<_> = grid.locations().collect();
        assert_eq!(
            all,
            vec![
                Location::new(0, 0),
                Location::new(1, 0),
                Location::new(0, 1),
                Location::new(1, 1)
            ]
        );
    }

    #[test]
    fn neighbor_order_is_fixed() {
        let grid = blank(3, 3);
        assert_eq!(
            grid.neighbors(&Location::new(1, 1)),
            vec![
                Location::new(1, 2),
                Location::new(2, 1),
                Location::new(1, 0),
                Location::new(0, 1)
            ]
        );
    }

    #[test]
    fn neighbors_at_corners() {
        let grid = blank(3, 3);
        assert_eq!(
            grid.neighbors(&Location::new(0, 0)),
            vec![Location::new(0, 1), Location::new(1, 0)]
        );
        assert_eq!(
            grid.neighbors(&Location::new(2, 2)),
            vec![Location::new(2, 1), Location::new(1, 2)]
        );
    }

    #[test]
    fn neighbors_on_single_cell_grid() {
        let grid = blank(1, 1);
        assert!(grid.neighbors(&Location::new(0, 0)).is_empty());
    }

    #[test]
    fn open_neighbors_skip_walls() {
        let mut grid = blank(3, 3);
        grid.set_wall(&Location::new(1, 2), true).unwrap();
        grid.set_wall(&Location::new(0, 1), true).unwrap();
        assert_eq!(
            grid.open_neighbors(&Location::new(1, 1)),
            vec![Location::new(2, 1), Location::new(1, 0)]
        );
    }

    #[test]
    fn set_wall_and_clear() {
        let mut grid = blank(3, 3);
        let p = Location::new(2, 0);
        grid.set_wall(&p, true).unwrap();
        assert!(grid.is_wall(&p));
        assert_eq!(grid.wall_count(), 1);
        grid.set_wall(&p, false).unwrap();
        assert!(!grid.is_wall(&p));
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn set_wall_protects_endpoints() {
        let mut grid = blank(3, 3);
        assert_eq!(
            grid.set_wall(&Location::new(0, 0), true),
            Err(GridError::ProtectedCell(Location::new(0, 0)))
        );
        assert_eq!(
            grid.set_wall(&Location::new(2, 2), false),
            Err(GridError::ProtectedCell(Location::new(2, 2)))
        );
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn set_wall_oob() {
        let mut grid = blank(3, 3);
        assert_eq!(
            grid.set_wall(&Location::new(3, 3), true),
            Err(GridError::OutOfBounds(Location::new(3, 3)))
        );
    }

    #[test]
    fn grid_at_oob() {
        let grid = blank(3, 3);
        assert_eq!(grid.at(&Location::new(0, 3)), None);
        assert_eq!(grid.at(&Location::new(3, 0)), None);
        assert!(!grid.is_wall(&Location::new(3, 0)));
    }

    #[test]
    fn direction_primitives() {
        for d in Direction::ALL {
            let raw: u8 = d.into();
            assert_eq!(Direction::try_from(raw).unwrap(), d);
        }
        assert!(Direction::try_from(4).is_err());
    }

    #[test]
    fn parse_preset_grids() {
        let grid = Grid::parse(GRID_CORRIDOR).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.start(), Location::new(0, 0));
        assert_eq!(grid.goal(), Location::new(0, 4));
        Grid::parse(GRID_OPEN).unwrap();
        Grid::parse(GRID_SEALED).unwrap();
    }

    #[test]
    fn parse_flips_rows() {
        let grid = Grid::parse("G#\nS.").unwrap();
        assert_eq!(grid.start(), Location::new(0, 0));
        assert_eq!(grid.goal(), Location::new(0, 1));
        assert!(grid.is_wall(&Location::new(1, 1)));
        assert!(!grid.is_wall(&Location::new(1, 0)));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let v = Grid::parse("S..\n.G");
        assert_eq!(
            v,
            Err(GridError::InvalidLayout(
                "row 1 has 2 cells, expected 3".to_string()
            ))
        );
    }

    #[test]
    fn parse_rejects_unknown_cells() {
        let v = Grid::parse("S?G");
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "invalid layout: unknown cell '?' at (1, 0)"
        );
    }

    #[test]
    fn parse_requires_markers() {
        assert_eq!(
            Grid::parse("..G"),
            Err(GridError::InvalidLayout("no start 'S'".to_string()))
        );
        assert_eq!(
            Grid::parse("S.."),
            Err(GridError::InvalidLayout("no goal 'G'".to_string()))
        );
        assert_eq!(
            Grid::parse("SSG"),
            Err(GridError::InvalidLayout("more than one 'S'".to_string()))
        );
        assert_eq!(
            Grid::parse("\n\n"),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn adjacency() {
        let p = Location::new(2, 2);
        assert!(p.is_adjacent(&Location::new(2, 3)));
        assert!(p.is_adjacent(&Location::new(1, 2)));
        assert!(!p.is_adjacent(&Location::new(3, 3)));
        assert!(!p.is_adjacent(&p));
    }
}
