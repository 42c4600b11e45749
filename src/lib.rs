//! # Lianliankan Solver Library
//!
//! This library provides the pathfinding and board-solvability engine for a
//! link-path tile puzzle ("Lianliankan" / "Shisen-Sho" style): two tiles of
//! the same kind can be cleared when an orthogonal path with at most two bends
//! joins them through empty cells.
//!
//! It is used by two binaries:
//! - `link_solver`: loads a board file and prints the link between two tiles,
//!   or the first pair that can be cleared.
//! - `deadlock_evaluator`: plays seeded boards level by level and reports how
//!   often the board deadlocks and needs a reshuffle.
//!
//! ## Modules
//! - `engine`: the board model (`Board`, `Cell`, `Position`) and a play
//!   session (`Game`) with hints, bombs, shuffling and level progression.
//! - `pathfinding`: `find_path`, the bounded-bend link search, and `Path`.
//! - `solver`: `find_available_pair`, the scan for any clearable pair.
//! - `level`: the difficulty policy mapping a level number to a board layout.
//! - `error`: error types for board construction and path queries.
//! - `utils`: parsing boards from text.

pub mod engine;
pub mod error;
pub mod level;
pub mod pathfinding;
pub mod solver;
pub mod utils;
