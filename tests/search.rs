use log::debug;
use nanorand::{Rng, WyRand};
use stepwise_pathfinding::{
    neighbors::MooreNeighborhood,
    observer::{EventLog, SearchEvent},
    prelude::*,
    Cost, Path, Point, PointSet, DEFAULT_GOAL, DEFAULT_START,
};

const EPSILON: Cost = 1e-9;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn search(grid: &Grid, start: Point, goal: Point, mode: SearchMode) -> (Step, usize) {
    let mut engine = SearchEngine::new(grid.size());
    engine
        .restart(SearchConfig::new(start, goal).with_mode(mode))
        .unwrap();
    let result = engine.run(grid);
    (result, engine.visited_count())
}

fn found(step: Step) -> Path<Point> {
    match step {
        Step::Found(path) => path,
        other => panic!("expected a path, got {:?}", other),
    }
}

/// Cheapest cost from `start` to every Point, by relaxing every edge until nothing changes.
fn exhaustive_costs(grid: &Grid, start: Point) -> Vec<Vec<Cost>> {
    let (width, height) = grid.size();
    let neighborhood = MooreNeighborhood::new(width, height);
    let mut costs = vec![vec![Cost::INFINITY; width]; height];
    costs[start.1][start.0] = 0.0;

    let mut all_neighbors = vec![];
    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..height {
            for x in 0..width {
                let cost = costs[y][x];
                if cost.is_infinite() {
                    continue;
                }
                all_neighbors.clear();
                neighborhood.get_all_neighbors(grid, (x, y), &mut all_neighbors);
                for &((ox, oy), step) in all_neighbors.iter() {
                    if cost + step < costs[oy][ox] - EPSILON {
                        costs[oy][ox] = cost + step;
                        changed = true;
                    }
                }
            }
        }
    }
    costs
}

/// Sums up the step costs along `path`, panicking on any move that is not allowed.
fn walk(grid: &Grid, path: &Path<Point>) -> Cost {
    let (width, height) = grid.size();
    let neighborhood = MooreNeighborhood::new(width, height);
    let mut all_neighbors = vec![];
    let mut total = 0.0;
    for pair in path.as_slice().windows(2) {
        all_neighbors.clear();
        neighborhood.get_all_neighbors(grid, pair[0], &mut all_neighbors);
        let &(_, step) = all_neighbors
            .iter()
            .find(|(p, _)| *p == pair[1])
            .unwrap_or_else(|| panic!("invalid move {:?} -> {:?}", pair[0], pair[1]));
        total += step;
    }
    total
}

fn random_grid(rng: &mut WyRand) -> (Grid, Point, Point) {
    let width = rng.generate_range(3_usize..10);
    let height = rng.generate_range(3_usize..10);
    let mut grid = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let tile = match rng.generate_range(0_u32..10) {
                0..=2 => Tile::Wall,
                3..=4 => Tile::Slow,
                _ => Tile::Empty,
            };
            grid.set((x, y), tile);
        }
    }
    let start = (rng.generate_range(0..width), rng.generate_range(0..height));
    let goal = (rng.generate_range(0..width), rng.generate_range(0..height));
    grid.place_endpoint(start);
    grid.place_endpoint(goal);
    (grid, start, goal)
}

#[test]
fn straight_diagonal() {
    init();
    let grid = Grid::new(5, 5);
    let path = found(search(&grid, (0, 0), (4, 4), SearchMode::Dijkstra).0);

    assert!((path.cost() - 5.64).abs() < EPSILON);
    assert_eq!(path, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
}

#[test]
fn detour_around_wall() {
    init();
    let grid: Grid = "
        .....
        .#...
        .#...
        .#...
        .....
    "
    .parse()
    .unwrap();
    let path = found(search(&grid, (0, 0), (4, 4), SearchMode::Dijkstra).0);

    assert!(path.cost() > 5.64);
    assert!(path.cost() <= 8.0);
    assert!((path.cost() - 6.82).abs() < EPSILON);
    assert!((walk(&grid, &path) - path.cost()).abs() < EPSILON);
}

#[test]
fn start_is_goal() {
    init();
    let grid = Grid::new(5, 5);
    let mut engine = SearchEngine::new(grid.size());
    engine.restart(SearchConfig::new((0, 0), (0, 0))).unwrap();

    let path = found(engine.step(&grid));
    assert_eq!(path, vec![(0, 0)]);
    assert_eq!(path.cost(), 0.0);
    assert_eq!(engine.state(), EngineState::Found);
}

#[test]
fn goal_is_wall() {
    init();
    let mut grid = Grid::new(5, 5);
    grid.set((4, 4), Tile::Wall);

    let mut engine = SearchEngine::with_observer(grid.size(), EventLog::default());
    engine.restart(SearchConfig::new((0, 0), (4, 4))).unwrap();

    let mut calls = 1;
    while let Step::Continue(_) = engine.step(&grid) {
        calls += 1;
    }
    assert_eq!(engine.state(), EngineState::Exhausted);
    assert_eq!(engine.visited_count(), 24);
    assert!(calls <= 25);
    assert!(!engine.is_visited((4, 4)));
    assert_eq!(engine.observer().events().last(), Some(&SearchEvent::Exhausted));
}

#[test]
fn no_corner_cutting() {
    init();
    let mut grid = Grid::new(3, 3);
    grid.set((1, 0), Tile::Wall);
    let path = found(search(&grid, (0, 0), (1, 1), SearchMode::Dijkstra).0);
    assert_eq!(path, vec![(0, 0), (0, 1), (1, 1)]);
    assert_eq!(path.cost(), 2.0);

    grid.set((0, 1), Tile::Wall);
    let (result, visited) = search(&grid, (0, 0), (1, 1), SearchMode::Dijkstra);
    assert_eq!(result, Step::Exhausted);
    assert_eq!(visited, 1);
}

#[test]
fn wall_start_is_not_an_error() {
    init();
    let mut grid = Grid::new(3, 3);
    grid.set((0, 0), Tile::Wall);
    let path = found(search(&grid, (0, 0), (2, 2), SearchMode::Dijkstra).0);
    assert_eq!(path[0], (0, 0));
}

#[test]
fn a_star_matches_dijkstra() {
    init();
    let grids = [
        ("
            .....
            .....
            .....
            .....
            .....
        ", (0, 0), (4, 4)),
        ("
            .....
            .#...
            .#...
            .#...
            .....
        ", (0, 0), (4, 4)),
        ("
            .....
            .~~~.
            .....
        ", (0, 1), (4, 1)),
    ];
    for (text, start, goal) in grids {
        let grid: Grid = text.parse().unwrap();
        let (dijkstra, dijkstra_visited) = search(&grid, start, goal, SearchMode::Dijkstra);
        let (a_star, a_star_visited) = search(&grid, start, goal, SearchMode::AStar);
        let (dijkstra, a_star) = (found(dijkstra), found(a_star));

        assert!((dijkstra.cost() - a_star.cost()).abs() < EPSILON, "{}", text);
        assert!(a_star_visited <= dijkstra_visited, "{}", text);
    }
}

#[test]
fn greedy_is_not_optimal() {
    init();
    let grid: Grid = "
        .....
        .~~~.
        .....
    "
    .parse()
    .unwrap();
    let dijkstra = found(search(&grid, (0, 1), (4, 1), SearchMode::Dijkstra).0);
    let greedy = found(search(&grid, (0, 1), (4, 1), SearchMode::Greedy).0);

    assert!(greedy.cost() > dijkstra.cost());
}

#[test]
fn dijkstra_is_optimal() {
    init();
    let mut rng = WyRand::new_seed(42);
    for _ in 0..200 {
        let (grid, start, goal) = random_grid(&mut rng);
        let costs = exhaustive_costs(&grid, start);
        let best = costs[goal.1][goal.0];

        match search(&grid, start, goal, SearchMode::Dijkstra).0 {
            Step::Found(path) => {
                assert!((path.cost() - best).abs() < 1e-6, "\n{}", grid);
                assert!((walk(&grid, &path) - path.cost()).abs() < 1e-6);
                assert_eq!(path[0], start);
                assert_eq!(path[path.len() - 1], goal);
            }
            Step::Exhausted => {
                debug!("no path from {:?} to {:?}", start, goal);
                assert!(best.is_infinite(), "\n{}", grid);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn modes_agree_on_reachability() {
    init();
    let mut rng = WyRand::new_seed(7);
    for _ in 0..200 {
        let (grid, start, goal) = random_grid(&mut rng);
        let summaries = compare_modes(&grid, grid.size(), start, goal).unwrap();
        let optimal = summaries[0].cost();

        for summary in summaries.iter() {
            assert_eq!(summary.cost().is_some(), optimal.is_some(), "\n{}", grid);
            if let (Some(cost), Some(optimal)) = (summary.cost(), optimal) {
                assert!(cost >= optimal - 1e-6, "\n{}", grid);
                assert!((walk(&grid, summary.path.as_ref().unwrap()) - cost).abs() < 1e-6);
            }
        }
        if let (Some(a_star), Some(optimal)) = (summaries[1].cost(), optimal) {
            assert!((a_star - optimal).abs() < EPSILON, "\n{}", grid);
            assert!(summaries[1].visited <= summaries[0].visited, "\n{}", grid);
            debug!(
                "{:?} -> {:?}: Dijkstra visited {}, A* visited {}",
                start, goal, summaries[0].visited, summaries[1].visited
            );
        }
    }
}

#[test]
fn terminates_within_cell_count() {
    init();
    let mut rng = WyRand::new_seed(1234);
    for _ in 0..100 {
        let (grid, start, goal) = random_grid(&mut rng);
        let (width, height) = grid.size();
        for mode in SearchMode::ALL {
            let mut engine = SearchEngine::new(grid.size());
            engine
                .restart(SearchConfig::new(start, goal).with_mode(mode))
                .unwrap();
            let mut calls = 0;
            loop {
                calls += 1;
                if !matches!(engine.step(&grid), Step::Continue(_)) {
                    break;
                }
            }
            assert!(engine.state().is_finished());
            assert_eq!(engine.steps(), calls);
            assert!(calls <= width * height, "\n{}", grid);
        }
    }
}

#[test]
fn reset_is_idempotent() {
    init();
    let grid = Grid::demo();
    let mut engine = SearchEngine::new(grid.size());
    engine
        .configure(SearchConfig::default().with_mode(SearchMode::AStar))
        .unwrap();

    let record = |engine: &mut SearchEngine| {
        let mut steps = vec![];
        loop {
            let step = engine.step(&grid);
            let done = !matches!(step, Step::Continue(_));
            steps.push(step);
            if done {
                return steps;
            }
        }
    };

    engine.reset().unwrap();
    let first = record(&mut engine);

    engine.reset().unwrap();
    engine.reset().unwrap();
    let second = record(&mut engine);

    assert_eq!(first, second);
    assert!(matches!(first.last(), Some(Step::Found(_))));
}

#[test]
fn reset_cancels_search() {
    init();
    let grid = Grid::demo();
    let mut engine = SearchEngine::new(grid.size());
    engine.restart(SearchConfig::default()).unwrap();
    for _ in 0..10 {
        engine.step(&grid);
    }
    assert_eq!(engine.visited_count(), 10);

    engine.reset().unwrap();
    assert_eq!(engine.state(), EngineState::Running);
    assert_eq!(engine.visited_count(), 0);
    assert_eq!(engine.open_count(), 1);
    assert!(engine.path().is_none());
}

#[test]
fn events_follow_the_search() {
    init();
    let grid = Grid::demo();
    let mut engine = SearchEngine::with_observer(grid.size(), EventLog::default());
    engine.restart(SearchConfig::default()).unwrap();
    let path = found(engine.run(&grid));

    let log = engine.observer();
    let visited = log.points(|e| match e {
        SearchEvent::Visited(p) => Some(*p),
        _ => None,
    });
    let candidates = log.points(|e| match e {
        SearchEvent::CandidateAdded(p) => Some(*p),
        _ => None,
    });
    let mut path_tiles = log.points(|e| match e {
        SearchEvent::PathTile(p) => Some(*p),
        _ => None,
    });
    path_tiles.reverse();

    assert_eq!(visited.len(), engine.visited_count());
    assert_eq!(path_tiles, path.as_slice());

    // every Point is announced once, and visited at most once, after being announced
    let unique: PointSet = candidates.iter().copied().collect();
    assert_eq!(unique.len(), candidates.len());
    let unique: PointSet = visited.iter().copied().collect();
    assert_eq!(unique.len(), visited.len());
    for p in visited.iter() {
        assert!(candidates.contains(p));
        assert!(!grid.is_wall(*p));
    }
}

#[test]
fn demo_grid() {
    init();
    let grid = Grid::demo();
    let summaries = compare_modes(&grid, grid.size(), DEFAULT_START, DEFAULT_GOAL).unwrap();
    let (dijkstra, a_star) = (&summaries[0], &summaries[1]);

    let optimal = dijkstra.cost().unwrap();
    let costs = exhaustive_costs(&grid, DEFAULT_START);
    assert!((optimal - costs[DEFAULT_GOAL.1][DEFAULT_GOAL.0]).abs() < 1e-6);

    assert!(a_star.visited < dijkstra.visited);
    assert!(dijkstra.visited <= grid.walkable_count());
    for summary in summaries.iter() {
        assert!(summary.path.is_some());
    }
}

#[test]
fn terrain_edit_requires_reset() {
    init();
    let mut grid = Grid::new(5, 1);
    let mut engine = SearchEngine::new(grid.size());
    engine.restart(SearchConfig::new((0, 0), (4, 0))).unwrap();
    assert!(matches!(engine.run(&grid), Step::Found(_)));

    assert!(grid.set((2, 0), Tile::Wall));
    engine.reset().unwrap();
    assert_eq!(engine.run(&grid), Step::Exhausted);
}
