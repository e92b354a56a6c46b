//! The Terrain the search runs on.
//!
//! The [`SearchEngine`](crate::SearchEngine) never owns the Grid. It only asks a [`Terrain`]
//! whether a Tile is a wall or slow, which allows the user to store the Grid in any format
//! they want, as long as they can answer those two questions for a given `(x, y)`.

use crate::{error::ParseGridError, Point};
use std::fmt;
use std::str::FromStr;

/// Width and height of the default Grid
pub const DEFAULT_SIZE: usize = 20;
/// Start Point of the default Grid
pub const DEFAULT_START: Point = (4, DEFAULT_SIZE / 2);
/// Goal Point of the default Grid
pub const DEFAULT_GOAL: Point = (DEFAULT_SIZE - 5, DEFAULT_SIZE / 2);

/// Read-only access to the walkability of a Grid.
///
/// Both functions are only ever called with Points inside the bounds the engine was
/// created with, and must not change their answer while a search is running.
pub trait Terrain {
    /// `true` if the Tile at `point` cannot be entered.
    fn is_wall(&self, point: Point) -> bool;
    /// `true` if entering the Tile at `point` is expensive.
    fn is_slow(&self, point: Point) -> bool;
}

/// The content of a single Tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// walkable at the regular cost
    #[default]
    Empty,
    /// walkable at five times the regular cost
    Slow,
    /// not walkable
    Wall,
}

impl Tile {
    /// The character used for this Tile by [`Grid`]'s `FromStr` and `Display`
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Slow => '~',
            Tile::Wall => '#',
        }
    }

    /// Inverse of [`symbol`](Tile::symbol)
    pub fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol {
            '.' => Some(Tile::Empty),
            '~' => Some(Tile::Slow),
            '#' => Some(Tile::Wall),
            _ => None,
        }
    }
}

/// Any `Fn(Point) -> Tile` can be used as Terrain:
/// ```
/// # use stepwise_pathfinding::{Terrain, Tile};
/// let terrain = |(x, _y): (usize, usize)| if x == 2 { Tile::Wall } else { Tile::Empty };
/// assert!(terrain.is_wall((2, 7)));
/// assert!(!terrain.is_slow((1, 1)));
/// ```
impl<F: Fn(Point) -> Tile> Terrain for F {
    fn is_wall(&self, point: Point) -> bool {
        self(point) == Tile::Wall
    }
    fn is_slow(&self, point: Point) -> bool {
        self(point) == Tile::Slow
    }
}

/// A dense Grid of [`Tile`]s, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates an empty Grid of the given size.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            tiles: vec![Tile::Empty; width * height],
        }
    }

    /// Creates the default [`DEFAULT_SIZE`]² Grid with a walled pocket around
    /// [`DEFAULT_START`], a diagonal wall below it and a patch of slow Tiles in front of
    /// [`DEFAULT_GOAL`].
    ///
    /// ```
    /// # use stepwise_pathfinding::{Grid, Tile, DEFAULT_START, DEFAULT_GOAL};
    /// let grid = Grid::demo();
    /// assert_eq!(grid.get(DEFAULT_START), Some(Tile::Empty));
    /// assert_eq!(grid.get(DEFAULT_GOAL), Some(Tile::Empty));
    /// assert_eq!(grid.get((6, 10)), Some(Tile::Wall));
    /// ```
    pub fn demo() -> Grid {
        let mut grid = Grid::new(DEFAULT_SIZE, DEFAULT_SIZE);
        let (sx, sy) = DEFAULT_START;
        let (gx, gy) = DEFAULT_GOAL;

        for x in sx - 2..=sx + 2 {
            grid.set((x, sy - 2), Tile::Wall);
            grid.set((x, sy + 2), Tile::Wall);
        }
        for y in sy - 1..=sy + 1 {
            grid.set((sx + 2, y), Tile::Wall);
        }
        for k in 3..=sx + 4 {
            grid.set((sx + k, sy + k), Tile::Wall);
        }
        for x in gx - 6..gx {
            for y in gy - 5..=gy + 2 {
                grid.set((x, y), Tile::Slow);
            }
        }

        grid.place_endpoint(DEFAULT_START);
        grid.place_endpoint(DEFAULT_GOAL);
        grid
    }

    /// `(width, height)` of the Grid
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// `true` if `point` lies inside the Grid
    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            Some(point.0 + point.1 * self.width)
        } else {
            None
        }
    }

    /// The Tile at `point`, or `None` outside of the Grid
    pub fn get(&self, point: Point) -> Option<Tile> {
        self.index(point).map(|i| self.tiles[i])
    }

    /// Changes the Tile at `point`. Points outside of the Grid are ignored.
    ///
    /// Returns `true` if the Tile actually changed, in which case any running search on
    /// this Grid has to be reset.
    pub fn set(&mut self, point: Point, tile: Tile) -> bool {
        match self.index(point) {
            Some(i) if self.tiles[i] != tile => {
                self.tiles[i] = tile;
                true
            }
            _ => false,
        }
    }

    /// Resets the Tile at `point` to [`Tile::Empty`]
    pub fn clear_tile(&mut self, point: Point) -> bool {
        self.set(point, Tile::Empty)
    }

    /// Marks `point` as the start or goal of a search, which can never be a wall or slow.
    pub fn place_endpoint(&mut self, point: Point) -> bool {
        self.clear_tile(point)
    }

    /// Removes all walls and slow Tiles
    pub fn clear(&mut self) {
        self.tiles.iter_mut().for_each(|tile| *tile = Tile::Empty);
    }

    /// Number of Tiles that are not walls.
    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile != Tile::Wall).count()
    }
}

impl Terrain for Grid {
    fn is_wall(&self, point: Point) -> bool {
        self.get(point) == Some(Tile::Wall)
    }
    fn is_slow(&self, point: Point) -> bool {
        self.get(point) == Some(Tile::Slow)
    }
}

/// Parses a Grid from rows of `.` (empty), `~` (slow) and `#` (wall).
///
/// Leading and trailing whitespace on every line as well as blank lines are ignored.
/// ```
/// # use stepwise_pathfinding::{Grid, Tile};
/// let grid: Grid = "
///     ..#
///     ~.#
/// ".parse().unwrap();
///
/// assert_eq!(grid.size(), (3, 2));
/// assert_eq!(grid.get((0, 1)), Some(Tile::Slow));
/// assert_eq!(grid.get((2, 0)), Some(Tile::Wall));
/// ```
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Grid, ParseGridError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = match rows.first() {
            Some(row) => row.chars().count(),
            None => return Err(ParseGridError::Empty),
        };

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseGridError::RaggedRow {
                    row: y,
                    found,
                    expected: width,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let tile = Tile::from_symbol(symbol).ok_or(ParseGridError::UnknownTile {
                    tile: symbol,
                    point: (x, y),
                })?;
                tiles.push(tile);
            }
        }

        Ok(Grid {
            width,
            height: rows.len(),
            tiles,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.tiles.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(fmt)?;
            }
            for tile in row {
                write!(fmt, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}
