//! Uninformed search: DFS and BFS.
//!
//! Both are the same driver under different frontier disciplines; only the
//! order in which pending nodes are removed differs.

use rustc_hash::FxHashSet;

use crate::frontier::Fifo;
use crate::frontier::Frontier;
use crate::frontier::Lifo;
use crate::search::NodeId;
use crate::search::SearchTree;
use crate::search::Solution;
use crate::space::State;

/// Edge count from the root. DFS and BFS are cost-unaware; the depth is
/// bookkeeping for the caller.
pub type Depth = u32;

/// Depth-first search.
///
/// Returns *some* path when one exists, not necessarily a shortest one; the
/// result depends on the order `successors` yields states and the stack
/// discipline. `None` means no goal-satisfying state is reachable.
pub fn dfs<St, G, N, I>(initial: St, goal_test: G, successors: N) -> Option<Solution<St, Depth>>
where
    St: State,
    G: FnMut(&St) -> bool,
    N: FnMut(&St) -> I,
    I: IntoIterator<Item = St>,
{
    search(Lifo::default(), initial, goal_test, successors)
}

/// Breadth-first search.
///
/// The first goal node removed from the queue has the minimum number of
/// edges from the root: every node at depth `d` is enqueued and dequeued
/// before any node at depth `d + 1` is dequeued.
pub fn bfs<St, G, N, I>(initial: St, goal_test: G, successors: N) -> Option<Solution<St, Depth>>
where
    St: State,
    G: FnMut(&St) -> bool,
    N: FnMut(&St) -> I,
    I: IntoIterator<Item = St>,
{
    search(Fifo::default(), initial, goal_test, successors)
}

/// The frontier-generic driver behind [`dfs`] and [`bfs`].
///
/// States are marked explored when *pushed*, not when popped. A state can
/// therefore never enter the frontier twice, which bounds the search to one
/// expansion per reachable state (and is what makes the BFS layer argument
/// hold), so the loop terminates on any finite state graph, cycles included.
fn search<F, St, G, N, I>(
    mut frontier: F,
    initial: St,
    mut goal_test: G,
    mut successors: N,
) -> Option<Solution<St, Depth>>
where
    F: Frontier<NodeId>,
    St: State,
    G: FnMut(&St) -> bool,
    N: FnMut(&St) -> I,
    I: IntoIterator<Item = St>,
{
    let mut tree = SearchTree::new();
    let mut explored = FxHashSet::default();

    explored.insert(initial);
    frontier.push(tree.push(initial, None, 0));

    while let Some(node_id) = frontier.pop() {
        let node = tree[node_id];

        if goal_test(node.state()) {
            log::debug!(
                "goal {:?} found at depth {} ({} nodes discovered)",
                node.state(),
                node.g(),
                tree.len(),
            );
            return Some(Solution::new(tree, node_id));
        }

        let depth = node.g();
        for successor in successors(node.state()) {
            if explored.insert(successor) {
                frontier.push(tree.push(successor, Some(node_id), depth + 1));
            }
        }
    }

    log::debug!("frontier exhausted after {} nodes; no path", tree.len());
    None
}
