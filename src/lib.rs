#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to watch shortest Paths being found on a Grid, one Tile at a time.
//!
//! ## Introduction
//! Regular Pathfinding functions take a start and a goal and return the finished Path.
//! That is what you want in a game, but it hides what the algorithm actually does. This crate
//! provides a [`SearchEngine`] that performs the same search in small steps: every call to
//! [`step`](SearchEngine::step) settles exactly one Tile, expands its neighbors and returns.
//! Between two calls the caller is free to draw the current state, wait for a timer, or
//! abandon the search with [`reset`](SearchEngine::reset).
//!
//! The Grid is 8-connected. Orthogonal steps cost `1`, diagonal steps cost `1.41`, and
//! entering a slow Tile costs five times as much. Diagonal steps may not cut the corner of a
//! wall. The same engine runs as Dijkstra, A* or greedy best-first search, depending on the
//! [`SearchMode`] it is configured with.
//!
//! ## Examples
//! Stepping through a search:
//! ```
//! use stepwise_pathfinding::{Grid, SearchConfig, SearchEngine, SearchMode, Step};
//!
//! // . = empty, ~ = slow, # = wall
//! let grid: Grid = "
//!     .#...
//!     .#.#.
//!     .~.#.
//!     ...#.
//!     .....
//! ".parse().unwrap();
//!
//! let mut engine = SearchEngine::new(grid.size());
//! engine.configure(SearchConfig::new((0, 0), (4, 0)).with_mode(SearchMode::AStar)).unwrap();
//! engine.reset().unwrap();
//!
//! let mut visited = 0;
//! let path = loop {
//!     match engine.step(&grid) {
//!         Step::Continue(_point) => visited += 1,
//!         Step::Found(path) => break path,
//!         Step::Exhausted | Step::Idle => unreachable!(),
//!     }
//! };
//!
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (4, 0));
//! assert_eq!(visited + 1, engine.visited_count());
//! ```
//!
//! Note that the engine never actually stores the Grid. Anything implementing [`Terrain`]
//! can be searched, including closures returning a [`Tile`]:
//! ```
//! use stepwise_pathfinding::{find_path, SearchConfig, Tile};
//!
//! let walls = [(1, 0), (1, 1), (1, 2)];
//! let terrain = |p: (usize, usize)| if walls.contains(&p) { Tile::Wall } else { Tile::Empty };
//!
//! let path = find_path(&terrain, (3, 4), SearchConfig::new((0, 0), (2, 0))).unwrap();
//! assert!(path.is_some());
//! ```
//!
//! ### Watching the search
//! A [`SearchObserver`](observer::SearchObserver) passed to
//! [`with_observer`](SearchEngine::with_observer) is notified whenever a Tile becomes a
//! candidate, is visited, or turns out to be part of the Path. See [`observer::EventLog`].
//!
//! ### Comparing modes
//! [`compare_modes`] runs all three modes on the same Grid, in parallel if the `parallel`
//! feature is enabled (default).
//!
//! ### Logging
//! With the `log` feature, the engine reports configuration changes and results at `debug`
//! level and every visited Tile at `trace` level.

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// The type used for distances and priorities
pub type Cost = f64;

/// A [`HashMap`](hashbrown::HashMap) keyed by [`Point`]s
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A [`HashSet`](hashbrown::HashSet) of [`Point`]s
pub type PointSet = hashbrown::HashSet<Point>;

#[macro_use]
mod utils;

mod config;
pub use config::SearchConfig;

mod engine;
pub use engine::{find_path, EngineState, SearchEngine, Step};

mod error;
pub use error::{ConfigError, ParseGridError};

pub mod heap;

pub mod neighbors;

mod node;
pub use node::{NodeIndex, PathNode, SearchMode};

pub mod observer;

mod path;
pub use path::Path;

mod terrain;
pub use terrain::{Grid, Terrain, Tile, DEFAULT_GOAL, DEFAULT_SIZE, DEFAULT_START};

mod compare;
pub use compare::{compare_modes, SearchSummary};

/// The most commonly used items of this crate
pub mod prelude {
    pub use crate::{
        compare_modes, find_path, observer::SearchObserver, EngineState, Grid, SearchConfig,
        SearchEngine, SearchMode, Step, Terrain, Tile,
    };
}
