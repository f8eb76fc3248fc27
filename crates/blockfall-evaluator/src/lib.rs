//! Feature extraction and baseline decision-making on top of
//! `blockfall-engine`.
//!
//! The engine enumerates and commits placements; this crate turns board
//! states into the scalar summaries a learning or heuristic agent consumes,
//! and ships two trivial baseline policies for driving sessions without a
//! trained model.
//!
//! - [`board_analysis`] - Lazy-evaluated board metrics (column surfaces,
//!   holes, bumpiness)
//! - [`placement_analysis`] - Board metrics of a hypothetical placement,
//!   computed against a clone of the live grid
//! - [`feature_vector`] - The fixed 4-scalar state summary, for the live
//!   session or a previewed move
//! - [`policy`] - Object-safe [`Policy`](policy::Policy) trait plus random
//!   and lowest-placement baselines, and a bounded session runner
//!
//! Ranking placements beyond these baselines is deliberately out of scope;
//! callers bring their own evaluator.

pub mod board_analysis;
pub mod feature_vector;
pub mod placement_analysis;
pub mod policy;
