use crate::{
    error::ConfigError,
    heap::{HeapUpdate, IndexedMinHeap},
    neighbors::MooreNeighborhood,
    node::{NodeIndex, PathNode},
    observer::SearchObserver,
    terrain::Terrain,
    Cost, Path, Point, PointMap, SearchConfig,
};
use slab::Slab;

/// The lifecycle of a [`SearchEngine`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    /// nothing to search yet, or the config changed since the last reset
    #[default]
    Idle,
    /// the search can make progress
    Running,
    /// the goal was reached. Terminal until the next reset.
    Found,
    /// every reachable Point was visited without reaching the goal. Terminal until the
    /// next reset.
    Exhausted,
}

impl EngineState {
    /// `true` for [`Found`](EngineState::Found) and [`Exhausted`](EngineState::Exhausted)
    pub fn is_finished(self) -> bool {
        matches!(self, EngineState::Found | EngineState::Exhausted)
    }
}

/// The outcome of a single [`step`](SearchEngine::step)
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// the engine has not been reset since it was last configured
    Idle,
    /// the contained Point was visited and its neighbors were added to the open set
    Continue(Point),
    /// the goal was reached along the contained Path
    Found(Path<Point>),
    /// the goal cannot be reached
    Exhausted,
}

/// A best-first search on a Grid that advances one visited Point at a time.
///
/// The engine only knows the size of the Grid. The [`Terrain`] is passed to every call of
/// [`step`](SearchEngine::step), so the Grid stays with the caller and can be edited between
/// searches. Editing it during a search is not supported: call
/// [`reset`](SearchEngine::reset) afterwards.
///
/// ## Examples
/// ```
/// use stepwise_pathfinding::{Grid, SearchConfig, SearchEngine, SearchMode, Step};
///
/// let grid: Grid = "
///     .....
///     .###.
///     .....
/// ".parse().unwrap();
///
/// let mut engine = SearchEngine::new(grid.size());
/// engine
///     .restart(SearchConfig::new((0, 0), (4, 2)).with_mode(SearchMode::AStar))
///     .unwrap();
///
/// let path = loop {
///     match engine.step(&grid) {
///         Step::Continue(_visited) => { /* draw it */ }
///         Step::Found(path) => break Some(path),
///         Step::Exhausted | Step::Idle => break None,
///     }
/// };
///
/// let path = path.unwrap();
/// assert_eq!(path[0], (0, 0));
/// assert_eq!(path[path.len() - 1], (4, 2));
/// ```
#[derive(Clone, Debug)]
pub struct SearchEngine<O: SearchObserver = ()> {
    neighborhood: MooreNeighborhood,
    config: Option<SearchConfig>,
    state: EngineState,
    open: IndexedMinHeap<PathNode>,
    closed: Slab<PathNode>,
    closed_ids: PointMap<NodeIndex>,
    path: Option<Path<Point>>,
    all_neighbors: Vec<(Point, Cost)>,
    steps: usize,
    observer: O,
}

impl SearchEngine {
    /// Creates an idle engine for a Grid of `(width, height)` without an observer
    pub fn new(size: (usize, usize)) -> SearchEngine {
        SearchEngine::with_observer(size, ())
    }
}

impl<O: SearchObserver> SearchEngine<O> {
    /// Creates an idle engine for a Grid of `(width, height)` that reports its progress to
    /// `observer`
    pub fn with_observer((width, height): (usize, usize), observer: O) -> SearchEngine<O> {
        SearchEngine {
            neighborhood: MooreNeighborhood::new(width, height),
            config: None,
            state: EngineState::Idle,
            open: IndexedMinHeap::new(),
            closed: Slab::new(),
            closed_ids: PointMap::default(),
            path: None,
            all_neighbors: Vec::with_capacity(8),
            steps: 0,
            observer,
        }
    }

    /// Sets what the next [`reset`](SearchEngine::reset) will search for.
    ///
    /// Any search in progress is discarded and the engine becomes
    /// [`Idle`](EngineState::Idle). Fails if `start` or `goal` lie outside of the Grid, in
    /// which case the previous configuration is kept.
    pub fn configure(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        let (width, height) = self.neighborhood.size();
        if !self.neighborhood.contains(config.start) {
            return Err(ConfigError::StartOutOfBounds {
                point: config.start,
                width,
                height,
            });
        }
        if !self.neighborhood.contains(config.goal) {
            return Err(ConfigError::GoalOutOfBounds {
                point: config.goal,
                width,
                height,
            });
        }

        engine_debug!("configured {:?}", config);
        self.config = Some(config);
        self.clear();
        self.state = EngineState::Idle;
        Ok(())
    }

    /// Discards all progress and starts the configured search from scratch.
    ///
    /// Can be called in any state. Fails only if [`configure`](SearchEngine::configure) was
    /// never successfully called.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        let config = self.config.ok_or(ConfigError::NotConfigured)?;
        self.clear();

        let start = PathNode::start(config.start, config.mode, config.goal);
        self.open.insert_or_decrease(start);
        self.observer.on_candidate_added(config.start);
        self.state = EngineState::Running;

        engine_debug!(
            "search from {:?} to {:?} ({:?})",
            config.start,
            config.goal,
            config.mode
        );
        Ok(())
    }

    /// [`configure`](SearchEngine::configure) followed by [`reset`](SearchEngine::reset)
    pub fn restart(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        self.configure(config)?;
        self.reset()
    }

    fn clear(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.closed_ids.clear();
        self.path = None;
        self.steps = 0;
    }

    /// Visits the most promising candidate.
    ///
    /// Once the search is finished, this keeps returning the same result without doing any
    /// work until the next [`reset`](SearchEngine::reset).
    pub fn step(&mut self, terrain: &impl Terrain) -> Step {
        let config = match (self.state, self.config) {
            (EngineState::Running, Some(config)) => config,
            (EngineState::Found, _) => {
                return self.path.clone().map_or(Step::Exhausted, Step::Found);
            }
            (EngineState::Exhausted, _) => return Step::Exhausted,
            _ => return Step::Idle,
        };

        self.steps += 1;
        let current = match self.open.extract_min() {
            Some(node) => node,
            None => {
                engine_debug!(
                    "no path to {:?} after visiting {} tiles",
                    config.goal,
                    self.closed.len()
                );
                self.state = EngineState::Exhausted;
                self.observer.on_exhausted();
                return Step::Exhausted;
            }
        };

        let current_id = self.closed.insert(current);
        self.closed_ids.insert(current.pos, current_id);
        self.observer.on_visited(current.pos);
        engine_trace!(
            "visit {:?} (g = {}, priority = {})",
            current.pos,
            current.g_cost,
            current.priority
        );

        if current.pos == config.goal {
            let path = self.reconstruct(current_id);
            engine_debug!(
                "found path of cost {} after {} steps",
                path.cost(),
                self.steps
            );
            self.state = EngineState::Found;
            self.path = Some(path.clone());
            return Step::Found(path);
        }

        self.all_neighbors.clear();
        self.neighborhood
            .get_all_neighbors(terrain, current.pos, &mut self.all_neighbors);

        for &(other_pos, step_cost) in self.all_neighbors.iter() {
            if self.closed_ids.contains_key(&other_pos) {
                continue;
            }
            let other = PathNode::new(
                other_pos,
                current.g_cost + step_cost,
                current_id,
                config.mode,
                config.goal,
            );
            if self.open.insert_or_decrease(other) == HeapUpdate::Inserted {
                self.observer.on_candidate_added(other_pos);
            }
        }

        Step::Continue(current.pos)
    }

    /// Steps until the search is finished and returns the final [`Step`]
    pub fn run(&mut self, terrain: &impl Terrain) -> Step {
        loop {
            match self.step(terrain) {
                Step::Continue(_) => {}
                finished => return finished,
            }
        }
    }

    fn reconstruct(&mut self, goal_id: NodeIndex) -> Path<Point> {
        let cost = self.closed[goal_id].g_cost;
        let mut steps = vec![];
        let mut current = Some(goal_id);

        while let Some(id) = current {
            let node = &self.closed[id];
            steps.push(node.pos);
            self.observer.on_path_tile(node.pos);
            current = node.prev;
        }
        steps.reverse();
        Path::new(steps, cost)
    }

    /// The current [`EngineState`]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The configuration the next reset will use
    pub fn config(&self) -> Option<&SearchConfig> {
        self.config.as_ref()
    }

    /// `(width, height)` of the Grid
    pub fn size(&self) -> (usize, usize) {
        self.neighborhood.size()
    }

    /// The Path, once the engine is [`Found`](EngineState::Found)
    pub fn path(&self) -> Option<&Path<Point>> {
        self.path.as_ref()
    }

    /// Number of settled Points
    pub fn visited_count(&self) -> usize {
        self.closed.len()
    }

    /// Number of candidates waiting in the open set
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// `true` if `point` has been settled in the current search
    pub fn is_visited(&self, point: Point) -> bool {
        self.closed_ids.contains_key(&point)
    }

    /// `true` if `point` is currently a candidate
    pub fn is_open(&self, point: Point) -> bool {
        self.open.contains(&point)
    }

    /// The settled node at `point`
    pub fn visited_node(&self, point: Point) -> Option<&PathNode> {
        self.closed_ids.get(&point).map(|&id| &self.closed[id])
    }

    /// Number of [`step`](SearchEngine::step) calls that did work since the last reset.
    ///
    /// Equal to [`visited_count`](SearchEngine::visited_count) while the search runs or
    /// once it is Found. The call that discovers exhaustion visits nothing, so an Exhausted
    /// search has taken one more step than it visited Points.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// the observer
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// the observer
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the engine and returns its observer
    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Runs a complete search with `config` on `terrain`.
///
/// Returns `Ok(None)` if the goal cannot be reached.
/// ```
/// # use stepwise_pathfinding::{find_path, Grid, SearchConfig};
/// let grid = Grid::new(5, 5);
/// let path = find_path(&grid, grid.size(), SearchConfig::new((0, 0), (4, 4)))
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(path.len(), 5);
/// assert!((path.cost() - 5.64).abs() < 1e-9);
/// ```
pub fn find_path(
    terrain: &impl Terrain,
    size: (usize, usize),
    config: SearchConfig,
) -> Result<Option<Path<Point>>, ConfigError> {
    let mut engine = SearchEngine::new(size);
    engine.restart(config)?;
    match engine.run(terrain) {
        Step::Found(path) => Ok(Some(path)),
        _ => Ok(None),
    }
}
