use std::fmt::Debug;

use nonmax::NonMaxUsize;

use crate::cost::Cost;
use crate::space::State;

/// A reference to a node within a [`SearchTree`].
///
/// Niche-packed so that `Option<NodeId>` is still a single word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeId(NonMaxUsize);

impl NodeId {
    #[inline(always)]
    fn new(index: usize) -> Self {
        Self(NonMaxUsize::new(index).unwrap())
    }

    #[inline(always)]
    #[must_use]
    pub fn index(&self) -> usize {
        self.0.get()
    }
}

/// One step of a search in progress: a state plus the bookkeeping needed to
/// reconstruct the path back to the root.
///
/// The parent link always points strictly earlier in discovery order, so
/// parent chains cannot form cycles; nodes are owned by the arena, never by
/// each other.
#[derive(Copy, Clone, Debug)]
pub struct SearchNode<St, C>
where
    St: State,
    C: Cost,
{
    pub(crate) state: St,
    pub(crate) parent: Option<NodeId>,
    /// Accumulated cost from the root. Depth for the uninformed algorithms.
    pub(crate) g: C,
}

impl<St, C> SearchNode<St, C>
where
    St: State,
    C: Cost,
{
    pub fn state(&self) -> &St {
        &self.state
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn g(&self) -> C {
        self.g
    }
}

/// All the nodes of one search call.
///
/// A growable arena addressed by [`NodeId`]; it naturally forms a tree as
/// each node may name a parent that was pushed before it.
pub struct SearchTree<St, C>
where
    St: State,
    C: Cost,
{
    nodes: Vec<SearchNode<St, C>>,
}

impl<St, C> SearchTree<St, C>
where
    St: State,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[inline(always)]
    pub fn push(&mut self, state: St, parent: Option<NodeId>, g: C) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode { state, parent, g });
        self.verify();
        id
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The root-first sequence of states ending at `node_id`.
    ///
    /// Walks the parent chain and reverses it, so the first element is the
    /// initial state and the last is `node_id`'s state. Read-only; calling it
    /// repeatedly on the same node yields the same sequence.
    #[must_use]
    pub fn path(&self, node_id: NodeId) -> Vec<St> {
        let mut path = vec![self[node_id].state];

        let mut current = node_id;
        while let Some(parent_id) = self[current].parent {
            debug_assert!(parent_id.index() < current.index());
            path.push(self[parent_id].state);
            current = parent_id;
        }

        path.reverse();
        path
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify(&self) {
        // All good... (hopefully)
    }
    #[cfg(feature = "verify")]
    pub(crate) fn verify(&self) {
        // Every parent link points strictly earlier in discovery order.
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(parent_id) = node.parent {
                debug_assert!(
                    parent_id.index() < i,
                    "Node[{i}] has a parent {} that does not precede it",
                    parent_id.index(),
                );
            }
        }
    }
}

impl<St, C> Default for SearchTree<St, C>
where
    St: State,
    C: Cost,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<St, C> std::ops::Index<NodeId> for SearchTree<St, C>
where
    St: State,
    C: Cost,
{
    type Output = SearchNode<St, C>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<St, C> Debug for SearchTree<St, C>
where
    St: State,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

/// A terminal node found by a search, together with the tree that owns its
/// parent chain.
#[derive(Debug)]
pub struct Solution<St, C>
where
    St: State,
    C: Cost,
{
    tree: SearchTree<St, C>,
    goal: NodeId,
}

impl<St, C> Solution<St, C>
where
    St: State,
    C: Cost,
{
    #[must_use]
    pub(crate) fn new(tree: SearchTree<St, C>, goal: NodeId) -> Self {
        Self { tree, goal }
    }

    /// The terminal state, which satisfied the goal test.
    pub fn state(&self) -> &St {
        self.tree[self.goal].state()
    }

    /// Accumulated cost at the terminal node (depth for DFS/BFS).
    pub fn cost(&self) -> C {
        self.tree[self.goal].g
    }

    /// Root-first sequence of states, from the initial state to the goal.
    #[must_use]
    pub fn path(&self) -> Vec<St> {
        self.tree.path(self.goal)
    }
}

/// The root-first sequence of states of a found solution.
///
/// Length is depth + 1; the endpoints are the initial and terminal states.
#[must_use]
pub fn node_to_path<St, C>(solution: &Solution<St, C>) -> Vec<St>
where
    St: State,
    C: Cost,
{
    solution.path()
}
