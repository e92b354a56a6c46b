//! Running every [`SearchMode`] on the same Grid.

use crate::{
    engine::{SearchEngine, Step},
    error::ConfigError,
    node::SearchMode,
    terrain::Terrain,
    Cost, Path, Point, SearchConfig,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The result of running one [`SearchMode`] to completion.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSummary {
    /// the mode that was used
    pub mode: SearchMode,
    /// the Path that was found, if any
    pub path: Option<Path<Point>>,
    /// how many Points were settled before the search finished
    pub visited: usize,
    /// how many calls to [`step`](SearchEngine::step) the search took
    pub steps: usize,
}

impl SearchSummary {
    /// Cost of the found Path
    pub fn cost(&self) -> Option<Cost> {
        self.path.as_ref().map(Path::cost)
    }
}

fn run_mode(
    terrain: &impl Terrain,
    size: (usize, usize),
    config: SearchConfig,
) -> Result<SearchSummary, ConfigError> {
    let mut engine = SearchEngine::new(size);
    engine.restart(config)?;
    let path = match engine.run(terrain) {
        Step::Found(path) => Some(path),
        _ => None,
    };
    Ok(SearchSummary {
        mode: config.mode,
        path,
        visited: engine.visited_count(),
        steps: engine.steps(),
    })
}

/// Searches from `start` to `goal` once with every mode in [`SearchMode::ALL`].
///
/// With the `parallel` feature (on by default) the searches run on separate threads.
///
/// ## Examples
/// ```
/// # use stepwise_pathfinding::{compare_modes, Grid, SearchMode};
/// let grid = Grid::new(5, 5);
/// let summaries = compare_modes(&grid, grid.size(), (0, 0), (4, 4)).unwrap();
///
/// assert_eq!(summaries[0].mode, SearchMode::Dijkstra);
/// assert_eq!(summaries[1].mode, SearchMode::AStar);
/// assert_eq!(summaries[0].cost(), summaries[1].cost());
/// assert!(summaries[1].visited <= summaries[0].visited);
/// ```
pub fn compare_modes<T: Terrain + Sync>(
    terrain: &T,
    size: (usize, usize),
    start: Point,
    goal: Point,
) -> Result<Vec<SearchSummary>, ConfigError> {
    let config = SearchConfig::new(start, goal);

    #[cfg(feature = "parallel")]
    let summaries: Result<Vec<_>, _> = SearchMode::ALL
        .par_iter()
        .map(|&mode| run_mode(terrain, size, config.with_mode(mode)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let summaries: Result<Vec<_>, _> = SearchMode::ALL
        .iter()
        .map(|&mode| run_mode(terrain, size, config.with_mode(mode)))
        .collect();

    summaries
}
