use shadow_rs::shadow;

shadow!(build);

// Search space and costs
// ----------------------
pub mod cost;
pub mod float_cost;
pub mod space;

// Search tree and frontiers
// -------------------------
pub mod frontier;
pub mod search;

// Algorithms
// ----------
pub mod algorithms;

// Problems
// --------
pub mod problems;

pub use crate::algorithms::astar::astar;
pub use crate::algorithms::uninformed::bfs;
pub use crate::algorithms::uninformed::dfs;
pub use crate::search::node_to_path;
