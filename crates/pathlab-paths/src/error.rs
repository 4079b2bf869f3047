use std::fmt;

use pathlab_core::{Point, Range};
use thiserror::Error;

/// Which end of a search a precondition error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Invalid search input. An unreachable goal is not an error; searches
/// report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{endpoint} {point} is outside the grid {bounds}")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        bounds: Range,
    },
    #[error("{endpoint} {point} is on a wall")]
    Blocked { endpoint: Endpoint, point: Point },
    #[error("move cost must be positive, got {0}")]
    InvalidMoveCost(i32),
}

/// Returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy \u{201c}{0}\u{201d} (expected bfs, dfs or astar)")]
pub struct ParseStrategyError(pub String);
