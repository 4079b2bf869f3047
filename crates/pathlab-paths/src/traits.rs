//! The graph a search runs over, described from the searcher's side.

use pathlab_core::Point;

/// Anything that can list the moves available from a coordinate.
///
/// BFS and DFS need nothing more.
pub trait Pather {
    /// Push every coordinate reachable in one move from `p` onto `buf`.
    /// The caller clears `buf` first.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] whose moves carry a cost.
pub trait WeightedPather: Pather {
    /// Price of the single move `from` → `to`; always positive.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// A [`WeightedPather`] that can also guess the remaining cost, as A* needs.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cost of reaching `to` from `from`. A guess that
    /// overshoots can make A* return a suboptimal path.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
