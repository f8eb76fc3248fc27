pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a requested move cannot be carried out.
///
/// Both variants are per-call and recoverable; the board is never mutated
/// on the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("placement is not in the current set of reachable resting placements")]
    IllegalMove,
    #[display("orientation is not supported by this piece kind")]
    InvalidOrientation,
}
