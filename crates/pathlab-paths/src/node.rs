//! Search nodes stored in a growable arena.
//!
//! Every expansion creates fresh nodes; a node refers to the node that
//! produced it by [`NodeId`], never by reference, so parent chains cannot
//! form cycles and reconstruction needs no borrow juggling.

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Path-cost bookkeeping carried by weighted searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cost {
    /// Cumulative cost from the start node.
    pub g: i32,
    /// Heuristic estimate of the remaining cost to the goal.
    pub h: i32,
    /// `g + h`, saturating at `i32::MAX`.
    pub f: i32,
}

impl Cost {
    #[inline]
    pub fn new(g: i32, h: i32) -> Self {
        Self {
            g,
            h,
            f: g.saturating_add(h),
        }
    }
}

/// A node wrapping a position, its parent link and optional costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode<T> {
    pub pos: T,
    pub parent: Option<NodeId>,
    pub cost: Option<Cost>,
}

impl<T> SearchNode<T> {
    /// A node with no parent.
    pub fn root(pos: T, cost: Option<Cost>) -> Self {
        Self {
            pos,
            parent: None,
            cost,
        }
    }

    /// A node produced by expanding `parent`.
    pub fn child(pos: T, parent: NodeId, cost: Option<Cost>) -> Self {
        Self {
            pos,
            parent: Some(parent),
            cost,
        }
    }
}

/// Append-only storage for the nodes of one search run.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    nodes: Vec<SearchNode<T>>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its id.
    pub fn push(&mut self, node: SearchNode<T>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node. Ids always come from this arena's `push`.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<T> {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the ancestors of `id`, starting with `id` itself and
    /// ending with the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

impl<T: Clone> NodeArena<T> {
    /// Reconstruct the positions from the root down to `id`.
    pub fn trace(&self, id: NodeId) -> Vec<T> {
        let mut path: Vec<T> = self.ancestors(id).map(|n| n.pos.clone()).collect();
        path.reverse();
        path
    }
}

/// Iterator returned by [`NodeArena::ancestors`].
pub struct Ancestors<'a, T> {
    arena: &'a NodeArena<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = &'a SearchNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?);
        self.next = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_walks_parents_back_to_root() {
        let mut arena = NodeArena::new();
        let a = arena.push(SearchNode::root('a', None));
        let b = arena.push(SearchNode::child('b', a, None));
        let _sibling = arena.push(SearchNode::child('x', a, None));
        let c = arena.push(SearchNode::child('c', b, None));
        assert_eq!(arena.trace(c), vec!['a', 'b', 'c']);
        assert_eq!(arena.trace(a), vec!['a']);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn trace_leaves_nodes_untouched() {
        let mut arena = NodeArena::new();
        let a = arena.push(SearchNode::root(1, Some(Cost::new(0, 30))));
        let b = arena.push(SearchNode::child(2, a, Some(Cost::new(10, 20))));
        let before = *arena.get(b);
        let _ = arena.trace(b);
        assert_eq!(*arena.get(b), before);
        assert_eq!(arena.ancestors(b).count(), 2);
    }

    #[test]
    fn cost_sums_f() {
        let c = Cost::new(20, 70);
        assert_eq!(c.f, 90);
    }
}
