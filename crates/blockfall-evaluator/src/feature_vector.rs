//! The 4-scalar state summary consumed by external evaluators.

use blockfall_engine::{MoveError, Placement, Session};
use serde::{Deserialize, Serialize};

use crate::board_analysis::BoardAnalysis;

/// `[highest occupied row, total cleared lines, bumpiness, holes]`.
///
/// The order is fixed; [`as_array`](FeatureVector::as_array) is the form
/// fed to a function approximator. The highest-row entry is the session's
/// maintained value (`-1` on an empty board), the cleared-lines entry the
/// session-cumulative counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    highest_tile: i32,
    total_cleared_lines: i32,
    bumpiness: i32,
    holes: i32,
}

impl FeatureVector {
    /// Features of the live (already committed) session state.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let analysis = BoardAnalysis::from_board(session.board());
        Self::build(&analysis, session.stats().total_cleared_lines())
    }

    /// Features of the state `placement` would produce, computed against
    /// a clone of the live grid. The session is not mutated.
    ///
    /// Fails with the same errors as [`Session::commit`] for a placement
    /// outside the current legal set.
    pub fn preview(session: &Session, placement: Placement) -> Result<Self, MoveError> {
        let (board, cleared) = session.preview_board(placement)?;
        let analysis = BoardAnalysis::from_owned(board);
        Ok(Self::build(
            &analysis,
            session.stats().total_cleared_lines() + cleared,
        ))
    }

    fn build(analysis: &BoardAnalysis, total_cleared_lines: usize) -> Self {
        Self {
            highest_tile: analysis.board().highest_tile(),
            total_cleared_lines: total_cleared_lines as i32,
            bumpiness: analysis.bumpiness() as i32,
            holes: analysis.holes() as i32,
        }
    }

    #[must_use]
    pub fn highest_tile(self) -> i32 {
        self.highest_tile
    }

    #[must_use]
    pub fn total_cleared_lines(self) -> i32 {
        self.total_cleared_lines
    }

    #[must_use]
    pub fn bumpiness(self) -> i32 {
        self.bumpiness
    }

    #[must_use]
    pub fn holes(self) -> i32 {
        self.holes
    }

    /// The vector in its fixed wire order.
    #[must_use]
    pub fn as_array(self) -> [i32; 4] {
        [
            self.highest_tile,
            self.total_cleared_lines,
            self.bumpiness,
            self.holes,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_features() {
        let session = Session::with_seed(10, 18, 1);
        let features = FeatureVector::from_session(&session);
        assert_eq!(features.as_array(), [-1, 0, 0, 0]);
    }

    #[test]
    fn test_preview_matches_commit() {
        // Walk a few moves; before each commit, the previewed features of
        // the chosen placement must equal the live features afterwards.
        let mut session = Session::with_seed(10, 18, 123);
        for _ in 0..8 {
            let placements = session.legal_placements();
            let Some(&placement) = placements.first() else {
                break;
            };
            let previewed = FeatureVector::preview(&session, placement).unwrap();
            let outcome = session.commit(placement).unwrap();
            assert_eq!(previewed, FeatureVector::from_session(&session));
            if outcome.terminal {
                break;
            }
        }
    }

    #[test]
    fn test_preview_rejects_illegal_placement() {
        use blockfall_engine::{Orientation, Point};

        let session = Session::with_seed(10, 18, 1);
        let floating = Placement::new(Point::new(4, 9), Orientation::Right);
        assert_eq!(
            FeatureVector::preview(&session, floating),
            Err(MoveError::IllegalMove)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let session = Session::with_seed(10, 18, 9);
        let features = FeatureVector::from_session(&session);
        let json = serde_json::to_string(&features).unwrap();
        let back: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, features);
    }
}
