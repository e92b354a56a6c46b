use crate::{heap::HeapEntry, neighbors::euclidean_distance, Cost, Point};

/// Index of a settled [`PathNode`] in the engine's node arena
pub type NodeIndex = usize;

/// Decides how candidates are ranked in the open set.
///
/// ```
/// # use stepwise_pathfinding::SearchMode;
/// let goal = (3, 4);
/// assert_eq!(SearchMode::Dijkstra.priority(2.0, (0, 0), goal), 2.0);
/// assert_eq!(SearchMode::AStar.priority(2.0, (0, 0), goal), 7.0);
/// assert_eq!(SearchMode::Greedy.priority(2.0, (0, 0), goal), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// rank by distance from the start
    #[default]
    Dijkstra,
    /// rank by distance from the start plus straight-line distance to the goal
    AStar,
    /// rank by straight-line distance to the goal only. Not guaranteed to find the shortest Path.
    Greedy,
}

impl SearchMode {
    /// All modes, in the order they are usually presented
    pub const ALL: [SearchMode; 3] = [SearchMode::Dijkstra, SearchMode::AStar, SearchMode::Greedy];

    /// The priority of a node at `pos` that is `g_cost` away from the start
    pub fn priority(self, g_cost: Cost, pos: Point, goal: Point) -> Cost {
        match self {
            SearchMode::Dijkstra => g_cost,
            SearchMode::AStar => g_cost + euclidean_distance(pos, goal),
            SearchMode::Greedy => euclidean_distance(pos, goal),
        }
    }
}

/// A Point reached during the search, together with how it was reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathNode {
    /// where the node is
    pub pos: Point,
    /// the cost of the best known Path from the start to `pos`
    pub g_cost: Cost,
    /// the value the open set is ordered by
    pub priority: Cost,
    /// the settled node `pos` was reached from. `None` only for the start.
    pub prev: Option<NodeIndex>,
}

impl PathNode {
    /// The node a search begins with
    pub fn start(pos: Point, mode: SearchMode, goal: Point) -> PathNode {
        PathNode {
            pos,
            g_cost: 0.0,
            priority: mode.priority(0.0, pos, goal),
            prev: None,
        }
    }

    /// A node at `pos` reached from the settled node `prev`
    pub fn new(
        pos: Point,
        g_cost: Cost,
        prev: NodeIndex,
        mode: SearchMode,
        goal: Point,
    ) -> PathNode {
        PathNode {
            pos,
            g_cost,
            priority: mode.priority(g_cost, pos, goal),
            prev: Some(prev),
        }
    }

    /// `true` for the node a search started with
    pub fn is_start(&self) -> bool {
        self.prev.is_none()
    }
}

impl HeapEntry for PathNode {
    type Key = Point;
    fn key(&self) -> Point {
        self.pos
    }
    fn priority(&self) -> Cost {
        self.priority
    }
}
