//! Implementation of search algorithms.
//!
//! These algorithms can do path-finding on generic search problems: the
//! caller supplies an initial state and pure `goal_test`/`successors` (and,
//! for A*, `heuristic`) functions, and gets back a [`crate::search::Solution`]
//! or `None` when no path exists.

pub mod astar;
pub mod uninformed;
