use pathlab_core::Point;

use crate::frontier::FifoFrontier;
use crate::path::Path;
use crate::traits::Pather;
use crate::traversal::traverse;

/// Breadth-first search from `start` to `goal`.
///
/// Nodes are expanded in non-decreasing depth order, so the returned path
/// has the fewest possible steps. Returns `None` when `goal` is unreachable.
/// Endpoints are not validated; see [`bfs`](crate::bfs) for the checked
/// grid entry point.
pub fn bfs_with<P: Pather>(pather: &P, start: Point, goal: Point) -> Option<Path> {
    traverse("bfs", pather, start, goal, FifoFrontier::new(), None, |_, _| None)
}
