use pathlab_core::Point;

use crate::frontier::MinCostFrontier;
use crate::node::Cost;
use crate::path::Path;
use crate::traits::AstarPather;
use crate::traversal::traverse;

/// A* search from `start` to `goal`.
///
/// The open node with the lowest `f = g + h` is expanded first; among equal
/// `f` the node pushed earliest wins. Children are always pushed, even when
/// a cheaper entry for the same coordinate is already open, and stale
/// entries are discarded when popped. With an admissible, consistent
/// heuristic the returned path has minimum total cost.
pub fn astar_with<P: AstarPather>(pather: &P, start: Point, goal: Point) -> Option<Path> {
    let root = Cost::new(0, pather.estimate(start, goal));
    traverse(
        "astar",
        pather,
        start,
        goal,
        MinCostFrontier::new(),
        Some(root),
        |parent, pos| {
            let g = parent
                .cost
                .map_or(0, |c| c.g)
                .saturating_add(pather.cost(parent.pos, pos));
            Some(Cost::new(g, pather.estimate(pos, goal)))
        },
    )
}
