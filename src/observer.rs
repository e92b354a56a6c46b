//! Notifications for visualizing a running search.

use crate::Point;

/// Receives progress notifications from a [`SearchEngine`](crate::SearchEngine).
///
/// All methods default to doing nothing. The engine's results never depend on what an
/// observer does.
pub trait SearchObserver {
    /// `point` entered the open set for the first time.
    fn on_candidate_added(&mut self, _point: Point) {}
    /// `point` was settled and will never be expanded again.
    fn on_visited(&mut self, _point: Point) {}
    /// `point` is part of the found Path. Called from the goal back to the start.
    fn on_path_tile(&mut self, _point: Point) {}
    /// The open set ran empty without reaching the goal.
    fn on_exhausted(&mut self) {}
}

/// The detached observer
impl SearchObserver for () {}

/// A single notification, as recorded by [`EventLog`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SearchEvent {
    CandidateAdded(Point),
    Visited(Point),
    PathTile(Point),
    Exhausted,
}

/// An observer that records every notification in order.
///
/// ```
/// # use stepwise_pathfinding::{observer::{EventLog, SearchEvent}, Grid, SearchConfig, SearchEngine};
/// let grid = Grid::new(2, 1);
/// let mut engine = SearchEngine::with_observer(grid.size(), EventLog::default());
/// engine.restart(SearchConfig::new((0, 0), (1, 0))).unwrap();
/// engine.run(&grid);
///
/// assert_eq!(
///     engine.observer().events(),
///     &[
///         SearchEvent::CandidateAdded((0, 0)),
///         SearchEvent::Visited((0, 0)),
///         SearchEvent::CandidateAdded((1, 0)),
///         SearchEvent::Visited((1, 0)),
///         SearchEvent::PathTile((1, 0)),
///         SearchEvent::PathTile((0, 0)),
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<SearchEvent>,
}

impl EventLog {
    /// all recorded events, oldest first
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// forgets all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// the Points of all events of one kind, in order
    pub fn points(&self, filter: impl Fn(&SearchEvent) -> Option<Point>) -> Vec<Point> {
        self.events.iter().filter_map(filter).collect()
    }
}

impl SearchObserver for EventLog {
    fn on_candidate_added(&mut self, point: Point) {
        self.events.push(SearchEvent::CandidateAdded(point));
    }
    fn on_visited(&mut self, point: Point) {
        self.events.push(SearchEvent::Visited(point));
    }
    fn on_path_tile(&mut self, point: Point) {
        self.events.push(SearchEvent::PathTile(point));
    }
    fn on_exhausted(&mut self) {
        self.events.push(SearchEvent::Exhausted);
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_candidate_added(&mut self, point: Point) {
        (**self).on_candidate_added(point)
    }
    fn on_visited(&mut self, point: Point) {
        (**self).on_visited(point)
    }
    fn on_path_tile(&mut self, point: Point) {
        (**self).on_path_tile(point)
    }
    fn on_exhausted(&mut self) {
        (**self).on_exhausted()
    }
}
