use crate::{
    node::SearchMode,
    terrain::{DEFAULT_GOAL, DEFAULT_START},
    Point,
};

/// Options for a single search run of a [`SearchEngine`](crate::SearchEngine)
///
/// Default options:
/// ```
/// # use stepwise_pathfinding::{SearchConfig, SearchMode};
/// assert_eq!(
///     SearchConfig {
///         start: (4, 10),
///         goal: (15, 10),
///         mode: SearchMode::Dijkstra,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// The Point the search begins at
    pub start: Point,
    /// The Point the search is looking for. This may be a wall, in which case the search
    /// ends exhausted.
    pub goal: Point,
    /// How candidates are ranked (defaults to [`SearchMode::Dijkstra`])
    pub mode: SearchMode,
}

impl SearchConfig {
    /// A config from `start` to `goal` using the default [`SearchMode`]
    pub fn new(start: Point, goal: Point) -> SearchConfig {
        SearchConfig {
            start,
            goal,
            mode: SearchMode::default(),
        }
    }

    /// The same config with a different [`SearchMode`]
    /// ```
    /// # use stepwise_pathfinding::{SearchConfig, SearchMode};
    /// let config = SearchConfig::new((0, 0), (3, 3)).with_mode(SearchMode::AStar);
    /// assert_eq!(config.mode, SearchMode::AStar);
    /// ```
    pub fn with_mode(self, mode: SearchMode) -> SearchConfig {
        SearchConfig { mode, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::new(DEFAULT_START, DEFAULT_GOAL)
    }
}
