//! Game logic on top of the core data structures.
//!
//! - [`Placement`] plus apply/preview helpers - resolving a piece kind and
//!   orientation to shape offsets and driving the board
//! - [`reachable_placements`] - breadth-first enumeration of every resting
//!   placement reachable from the spawn configuration
//! - [`Session`] - the multi-turn state machine consumed by external
//!   decision-making agents
//! - [`SessionStats`] - per-session counters
//! - [`PieceSampler`] - the seeded per-session piece source
//!
//! # Turn flow
//!
//! 1. Ask the [`Session`] for [`legal_placements`](Session::legal_placements)
//! 2. Pick one (the engine does not rank them)
//! 3. [`commit`](Session::commit) it; rows clear, the next piece spawns,
//!    and the move's reward and terminal flag come back
//!
//! A non-mutating preview of any candidate runs through
//! [`preview_board`](Session::preview_board) on a deep copy of the grid.

pub use self::{piece_sampler::*, placement::*, search::*, session::*, session_stats::*};

mod piece_sampler;
mod placement;
mod search;
mod session;
mod session_stats;
