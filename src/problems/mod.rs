//! Example problems driving the generic search core.
//!
//! The core knows nothing about these; they only supply `goal_test`,
//! `successors`, and heuristic functions, and consume the returned paths.

pub mod maze;
