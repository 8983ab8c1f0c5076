//! A* search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::search::NodeId;
use crate::search::SearchTree;
use crate::search::Solution;
use crate::space::State;

/// The ranking tuple for A*.
///
/// We prefer better f-values, and tie break for lower h.
///
/// Intuition around higher g-value might be slightly easier, but keeping the
/// raw h value helps to avoid recomputing it later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AStarRank<C: Cost> {
    f: C,
    h: C,
}

impl<C> AStarRank<C>
where
    C: Cost,
{
    #[must_use]
    pub fn new(g: C, h: C) -> Self {
        Self {
            f: g.saturating_add(&h),
            h,
        }
    }
}

/// An open-list entry: a rank plus the index of the ranked node.
///
/// Entries carry just ranking information and an index into the node arena,
/// so heap operations move as little data as possible.
#[derive(Copy, Clone, Debug)]
struct OpenEntry<C>
where
    C: Cost,
{
    rank: AStarRank<C>,
    /// The index of this entry's node in the arena. Ignored when ranking.
    node_id: NodeId,
}

/// PartialEq is forwarded to self.rank's PartialEq
impl<C: Cost> PartialEq for OpenEntry<C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl<C: Cost> Eq for OpenEntry<C> {}

/// PartialOrd is forwarded to Ord::cmp
impl<C: Cost> PartialOrd for OpenEntry<C> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.rank.cmp(&other.rank))
    }
}
/// Ord is forwarded to self.rank's Ord
impl<C: Cost> Ord for OpenEntry<C> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Heuristic-guided best-first search with uniform step cost of one.
///
/// Unlike DFS/BFS, a state may be reached again through a cheaper path after
/// it was first enqueued, so instead of a first-sight explored set this keeps
/// the best known g per state: a successor is enqueued only when it improves
/// on the recorded cost, and an already-queued entry that got undercut later
/// is dropped when popped (lazy deletion instead of a decrease-key).
///
/// The returned path is minimal-cost when `heuristic` never overestimates the
/// remaining cost and is consistent across edges; that is the caller's
/// responsibility, an inadmissible heuristic still yields *a* path.
/// Tie-breaking among equal `f = g + h` values is unspecified.
pub fn astar<St, C, G, N, I, H>(
    initial: St,
    mut goal_test: G,
    mut successors: N,
    mut heuristic: H,
) -> Option<Solution<St, C>>
where
    St: State,
    C: Cost,
    G: FnMut(&St) -> bool,
    N: FnMut(&St) -> I,
    I: IntoIterator<Item = St>,
    H: FnMut(&St) -> C,
{
    let mut tree = SearchTree::new();
    // std's BinaryHeap is a max-heap; Reverse turns it into best-rank-first.
    let mut open = BinaryHeap::new();
    let mut best_g: FxHashMap<St, C> = FxHashMap::default();

    let root_h = heuristic(&initial);
    let root = tree.push(initial, None, C::zero());
    best_g.insert(initial, C::zero());
    open.push(Reverse(OpenEntry {
        rank: AStarRank::new(C::zero(), root_h),
        node_id: root,
    }));

    while let Some(Reverse(entry)) = open.pop() {
        let node = tree[entry.node_id];
        let g = node.g();

        // A cheaper path to this state was enqueued after this entry.
        if best_g.get(node.state()).is_some_and(|best| *best < g) {
            continue;
        }

        if goal_test(node.state()) {
            log::debug!(
                "goal {:?} found with cost {} ({} nodes discovered)",
                node.state(),
                g,
                tree.len(),
            );
            return Some(Solution::new(tree, entry.node_id));
        }

        for successor in successors(node.state()) {
            let new_g = g.saturating_add(&C::one());
            if best_g.get(&successor).is_some_and(|best| *best <= new_g) {
                continue;
            }
            best_g.insert(successor, new_g);

            let child = tree.push(successor, Some(entry.node_id), new_g);
            open.push(Reverse(OpenEntry {
                rank: AStarRank::new(new_g, heuristic(&successor)),
                node_id: child,
            }));
        }
    }

    log::debug!("open list exhausted after {} nodes; no path", tree.len());
    None
}
