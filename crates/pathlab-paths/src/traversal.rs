//! The search loop shared by every strategy.

use std::collections::HashSet;

use pathlab_core::Point;

use crate::frontier::Frontier;
use crate::node::{Cost, NodeArena, SearchNode};
use crate::path::Path;
use crate::traits::Pather;

/// Run one search from `start` to `goal`.
///
/// The loop pops the next node by the frontier's policy, returns the traced
/// path on reaching `goal`, skips coordinates that were already expanded,
/// and otherwise pushes a fresh child for every neighbor not yet expanded.
/// A coordinate is marked explored after its expansion, so it may sit in
/// the frontier several times but is expanded at most once.
///
/// `child_cost` computes the cost payload of a child from its parent node;
/// unweighted searches pass `|_, _| None`.
pub(crate) fn traverse<P, F, C>(
    name: &str,
    pather: &P,
    start: Point,
    goal: Point,
    mut frontier: F,
    root_cost: Option<Cost>,
    mut child_cost: C,
) -> Option<Path>
where
    P: Pather,
    F: Frontier,
    C: FnMut(&SearchNode<Point>, Point) -> Option<Cost>,
{
    let mut arena = NodeArena::new();
    let root = arena.push(SearchNode::root(start, root_cost));
    frontier.push(root, arena.get(root));

    let mut explored: HashSet<Point> = HashSet::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(id) = frontier.pop() {
        let current = *arena.get(id);

        if current.pos == goal {
            let path = Path::new(arena.trace(id));
            log::debug!(
                "{name}: reached {goal} from {start} in {} steps ({} expanded, {} nodes)",
                path.steps(),
                explored.len(),
                arena.len()
            );
            return Some(path);
        }

        if explored.contains(&current.pos) {
            continue;
        }

        log::trace!("{name}: expanding {}", current.pos);
        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);
        for &np in &nbuf {
            if explored.contains(&np) {
                continue;
            }
            let child = SearchNode::child(np, id, child_cost(&current, np));
            let child_id = arena.push(child);
            frontier.push(child_id, &child);
        }

        explored.insert(current.pos);
    }

    log::debug!(
        "{name}: no path from {start} to {goal} ({} expanded, {} nodes)",
        explored.len(),
        arena.len()
    );
    None
}
