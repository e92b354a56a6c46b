//! The moves available on the Grid and what they cost.

use crate::{terrain::Terrain, Cost, Point};

/// Cost of an orthogonal step onto a regular Tile
pub const ORTHOGONAL_COST: Cost = 1.0;
/// Cost of an orthogonal step onto a slow Tile
pub const SLOW_ORTHOGONAL_COST: Cost = 5.0;
/// Cost of a diagonal step onto a regular Tile.
///
/// This is √2 rounded to two decimals, which every other cost in this crate is calibrated to.
pub const DIAGONAL_COST: Cost = 1.41;
/// Cost of a diagonal step onto a slow Tile (√50 rounded to two decimals)
pub const SLOW_DIAGONAL_COST: Cost = 7.07;

const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

/// The straight-line distance between two Points.
///
/// ```
/// # use stepwise_pathfinding::neighbors::euclidean_distance;
/// assert_eq!(euclidean_distance((0, 0), (3, 4)), 5.0);
/// ```
pub fn euclidean_distance(a: Point, b: Point) -> Cost {
    let dx = a.0 as Cost - b.0 as Cost;
    let dy = a.1 as Cost - b.1 as Cost;
    (dx * dx + dy * dy).sqrt()
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
///
/// A diagonal step is only possible if neither of the two Tiles it passes between is a
/// wall, so a Path can never squeeze through the corner of two touching walls:
/// ```no_code
/// A #
/// # o   <- not reachable from A in one step
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
    width: usize,
    height: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood.
    ///
    /// `width` and `height` are the size of the Grid to move on.
    pub fn new(width: usize, height: usize) -> MooreNeighborhood {
        MooreNeighborhood { width, height }
    }

    /// `(width, height)` of the Grid
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// `true` if `point` lies inside the Grid
    pub fn contains(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    fn offset(&self, point: Point, (dx, dy): (isize, isize)) -> Option<Point> {
        let x = point.0.checked_add_signed(dx)?;
        let y = point.1.checked_add_signed(dy)?;
        Some((x, y)).filter(|&p| self.contains(p))
    }

    fn open(&self, terrain: &impl Terrain, point: Point, diff: (isize, isize)) -> Option<Point> {
        self.offset(point, diff).filter(|&p| !terrain.is_wall(p))
    }

    /// Collects every Point reachable from `point` in one step together with the cost of
    /// that step into `target`.
    ///
    /// The order is fixed: up, down, left, right, then up-left, down-right, up-right,
    /// down-left. `target` is not cleared.
    pub fn get_all_neighbors(
        &self,
        terrain: &impl Terrain,
        point: Point,
        target: &mut Vec<(Point, Cost)>,
    ) {
        for diff in ORTHOGONAL {
            if let Some(other) = self.open(terrain, point, diff) {
                let cost = if terrain.is_slow(other) {
                    SLOW_ORTHOGONAL_COST
                } else {
                    ORTHOGONAL_COST
                };
                target.push((other, cost));
            }
        }

        for (dx, dy) in DIAGONAL {
            let other = self.open(terrain, point, (dx, dy));
            let side_x = self.open(terrain, point, (dx, 0));
            let side_y = self.open(terrain, point, (0, dy));
            if let (Some(other), Some(_), Some(_)) = (other, side_x, side_y) {
                let cost = if terrain.is_slow(other) {
                    SLOW_DIAGONAL_COST
                } else {
                    DIAGONAL_COST
                };
                target.push((other, cost));
            }
        }
    }
}
