use crate::Point;
use thiserror::Error;

/// Errors raised when a [`SearchEngine`](crate::SearchEngine) is given a configuration it
/// cannot search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The start coordinate lies outside of the Grid.
    #[error("start {point:?} is outside of the {width}x{height} grid")]
    StartOutOfBounds {
        /// the rejected coordinate
        point: Point,
        /// width of the Grid
        width: usize,
        /// height of the Grid
        height: usize,
    },
    /// The goal coordinate lies outside of the Grid.
    #[error("goal {point:?} is outside of the {width}x{height} grid")]
    GoalOutOfBounds {
        /// the rejected coordinate
        point: Point,
        /// width of the Grid
        width: usize,
        /// height of the Grid
        height: usize,
    },
    /// `reset` was called before any configuration was supplied.
    #[error("no search has been configured")]
    NotConfigured,
}

/// Errors raised when parsing a [`Grid`](crate::Grid) from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseGridError {
    /// The text contained no rows.
    #[error("grid is empty")]
    Empty,
    /// A row had a different number of tiles than the first one.
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        /// index of the offending row
        row: usize,
        /// number of tiles in that row
        found: usize,
        /// number of tiles in the first row
        expected: usize,
    },
    /// A character that is not part of the tile alphabet.
    #[error("unknown tile {tile:?} at {point:?}")]
    UnknownTile {
        /// the character
        tile: char,
        /// where it was found
        point: Point,
    },
}
