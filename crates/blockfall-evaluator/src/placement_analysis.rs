//! Analysis of the board state a placement would produce.
//!
//! [`PlacementAnalysis`] runs the commit sequence (fill, then clear) against
//! a clone of the supplied board and bundles the cleared-line count with a
//! [`BoardAnalysis`] of the result. The live board is never touched, so any
//! number of candidates can be analyzed side by side.

use blockfall_engine::{Board, MoveError, PieceKind, Placement, preview};

use crate::board_analysis::BoardAnalysis;

#[derive(Debug)]
pub struct PlacementAnalysis {
    placement: Placement,
    cleared_lines: usize,
    board_analysis: BoardAnalysis,
}

impl PlacementAnalysis {
    /// Simulates `placement` of `kind` on a clone of `board`.
    ///
    /// Fails without side effects when the placement is illegal or the
    /// orientation unsupported.
    pub fn from_board(
        board: &Board,
        kind: PieceKind,
        placement: Placement,
    ) -> Result<Self, MoveError> {
        let (after, cleared_lines) = preview(board, kind, placement)?;
        Ok(Self {
            placement,
            cleared_lines,
            board_analysis: BoardAnalysis::from_owned(after),
        })
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    #[must_use]
    pub fn board_analysis(&self) -> &BoardAnalysis {
        &self.board_analysis
    }
}
