//! Open sets. The ordering policy is the only thing that tells BFS, DFS and
//! A* apart.

use std::collections::{BinaryHeap, VecDeque};

use crate::node::{NodeId, SearchNode};

/// The set of discovered but not yet expanded nodes.
///
/// Frontiers store only [`NodeId`]s, so one frontier works for any position
/// type; the node is passed to `push` so ordered policies can read its cost.
pub trait Frontier {
    /// Add a node to the open set.
    fn push<T>(&mut self, id: NodeId, node: &SearchNode<T>);

    /// Remove and return the next node according to the policy.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of queued nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default, Clone)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push<T>(&mut self, id: NodeId, _node: &SearchNode<T>) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default, Clone)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push<T>(&mut self, id: NodeId, _node: &SearchNode<T>) {
        self.stack.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Reference into the node arena, ordered by `f` and then by insertion.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
struct NodeRef {
    id: NodeId,
    f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest pushed node among equal f.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest `f` first; ties go to the node inserted earliest.
///
/// Nodes pushed without a [`Cost`](crate::node::Cost) rank as `f = 0`.
/// Duplicate positions are kept; the search discards stale entries when it
/// pops them.
#[derive(Debug, Default, Clone)]
pub struct MinCostFrontier {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl MinCostFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for MinCostFrontier {
    fn push<T>(&mut self, id: NodeId, node: &SearchNode<T>) {
        let f = node.cost.map_or(0, |c| c.f);
        self.heap.push(NodeRef { id, f, seq: self.seq });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|r| r.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
