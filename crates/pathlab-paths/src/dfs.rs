use pathlab_core::Point;

use crate::frontier::LifoFrontier;
use crate::path::Path;
use crate::traits::Pather;
use crate::traversal::traverse;

/// Depth-first search from `start` to `goal`.
///
/// Uses the same explored-set policy as BFS: a popped coordinate that was
/// already expanded is skipped, so each coordinate is expanded at most once.
/// The last generated neighbor is expanded first. The returned path is
/// valid but not necessarily the shortest.
pub fn dfs_with<P: Pather>(pather: &P, start: Point, goal: Point) -> Option<Path> {
    traverse("dfs", pather, start, goal, LifoFrontier::new(), None, |_, _| None)
}
