use serde::{Deserialize, Serialize};

use crate::{
    MoveError,
    core::{
        board::Board,
        piece::{Orientation, PieceKind},
        point::Point,
    },
};

/// A final or intermediate piece configuration: anchor plus orientation.
///
/// The piece kind is not part of the value; placements are always
/// interpreted against a specific piece (usually the session's current
/// one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub anchor: Point,
    pub orientation: Orientation,
}

impl Placement {
    #[must_use]
    pub const fn new(anchor: Point, orientation: Orientation) -> Self {
        Self { anchor, orientation }
    }

    /// The spawn configuration at `anchor` (default orientation).
    #[must_use]
    pub const fn spawn(anchor: Point) -> Self {
        Self::new(anchor, Orientation::Right)
    }

    /// The same placement one row closer to the floor.
    #[must_use]
    pub fn shifted_down(self) -> Self {
        Self::new(self.anchor + Point::DOWN, self.orientation)
    }
}

/// Resolves the shape offsets of `kind` in `orientation`, rejecting
/// orientations the kind does not support.
pub fn resolve_offsets(
    kind: PieceKind,
    orientation: Orientation,
) -> Result<[Point; 4], MoveError> {
    if !kind.supports(orientation) {
        return Err(MoveError::InvalidOrientation);
    }
    Ok(kind.offsets(orientation))
}

/// Whether `placement` of `kind` is currently legal on `board`.
#[must_use]
pub fn is_legal(board: &Board, kind: PieceKind, placement: Placement) -> bool {
    kind.supports(placement.orientation)
        && board.is_legal_placement(&kind.offsets(placement.orientation), placement.anchor)
}

/// Whether `placement` is legal and cannot move down one more row,
/// i.e. it rests on the floor or on stacked tiles.
#[must_use]
pub fn is_resting(board: &Board, kind: PieceKind, placement: Placement) -> bool {
    is_legal(board, kind, placement) && !is_legal(board, kind, placement.shifted_down())
}

/// Commits `placement` to `board`: fills the cells, then clears filled
/// rows. Returns the number of rows cleared.
///
/// Validates before mutating; on `Err` the board is untouched.
pub fn apply(board: &mut Board, kind: PieceKind, placement: Placement) -> Result<usize, MoveError> {
    let offsets = resolve_offsets(kind, placement.orientation)?;
    board.place(&offsets, placement.anchor, kind)?;
    Ok(board.clear_filled_rows())
}

/// Runs [`apply`] against a deep copy of `board`, leaving the original
/// untouched. Returns the resulting board and the rows cleared.
///
/// The clone owns its grid outright, so concurrent previews of different
/// candidates never alias.
pub fn preview(board: &Board, kind: PieceKind, placement: Placement) -> Result<(Board, usize), MoveError> {
    let mut scratch = board.clone();
    let cleared = apply(&mut scratch, kind, placement)?;
    Ok((scratch, cleared))
}

#[cfg(test)]
mod tests {
    use crate::core::board::Cell;

    use super::*;

    #[test]
    fn test_unsupported_orientation_is_rejected() {
        let mut board = Board::new(6, 8);
        for kind in [PieceKind::J, PieceKind::I, PieceKind::S, PieceKind::Z] {
            let placement = Placement::new(Point::new(1, 1), Orientation::Down);
            assert!(!is_legal(&board, kind, placement));
            assert_eq!(
                apply(&mut board, kind, placement),
                Err(MoveError::InvalidOrientation)
            );
        }
    }

    #[test]
    fn test_apply_places_and_clears() {
        // Bottom row filled except the two leftmost cells; an O piece
        // dropped there completes exactly one row.
        let mut board = Board::from_ascii(
            "
            ......
            ......
            ......
            ..####
            ",
        );
        let cleared = apply(
            &mut board,
            PieceKind::O,
            Placement::new(Point::new(0, 0), Orientation::Up),
        )
        .unwrap();
        assert_eq!(cleared, 1);
        // The upper half of the O survives on the floor.
        assert_eq!(board.cell(Point::new(0, 0)), Some(Cell::Piece(PieceKind::O)));
        assert_eq!(board.cell(Point::new(1, 0)), Some(Cell::Piece(PieceKind::O)));
        assert!(board.cell(Point::new(2, 0)).unwrap().is_empty());
        assert_eq!(board.highest_tile(), 0);
    }

    #[test]
    fn test_preview_leaves_the_board_untouched() {
        let board = Board::from_ascii(
            "
            ......
            ......
            ......
            ..####
            ",
        );
        let before = board.clone();
        let (after, cleared) = preview(
            &board,
            PieceKind::O,
            Placement::new(Point::new(0, 0), Orientation::Up),
        )
        .unwrap();
        assert_eq!(board, before);
        assert_eq!(cleared, 1);
        assert_ne!(after, board);
    }

    #[test]
    fn test_is_resting() {
        let board = Board::from_ascii(
            "
            ......
            ......
            ......
            ...###
            ",
        );
        let o = PieceKind::O;
        // On the floor.
        assert!(is_resting(&board, o, Placement::new(Point::new(0, 0), Orientation::Up)));
        // On top of the stack.
        assert!(is_resting(&board, o, Placement::new(Point::new(3, 1), Orientation::Up)));
        // Mid-air.
        assert!(!is_resting(&board, o, Placement::new(Point::new(0, 1), Orientation::Up)));
        // Overlapping the stack is not "resting", it is illegal outright.
        assert!(!is_resting(&board, o, Placement::new(Point::new(3, 0), Orientation::Up)));
    }
}
