use std::cell::OnceCell;

use blockfall_engine::Board;

/// Lazily computed per-board metrics.
///
/// Owns a copy of the board, so an analysis stays valid however the live
/// session moves on. Each metric is computed at most once.
#[derive(Debug)]
pub struct BoardAnalysis {
    board: Board,
    column_surfaces: OnceCell<Vec<Option<i32>>>,
    holes: OnceCell<u32>,
    bumpiness: OnceCell<u32>,
}

impl BoardAnalysis {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self::from_owned(board.clone())
    }

    /// Takes ownership of an already-detached board (e.g. a preview
    /// result) without another copy.
    #[must_use]
    pub fn from_owned(board: Board) -> Self {
        Self {
            board,
            column_surfaces: OnceCell::new(),
            holes: OnceCell::new(),
            bumpiness: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Per column, the row index of its topmost occupied cell; `None` for
    /// a column with no occupied cell.
    #[must_use]
    pub fn column_surfaces(&self) -> &[Option<i32>] {
        self.column_surfaces.get_or_init(|| {
            self.board
                .columns()
                .map(|column| {
                    column
                        .iter()
                        .rposition(|cell| !cell.is_empty())
                        .map(|y| y as i32)
                })
                .collect()
        })
    }

    /// Number of empty cells lying strictly below their column's surface.
    ///
    /// Columns with no occupied cell contribute nothing; a fully packed
    /// board therefore has zero holes, as does an empty one.
    #[must_use]
    pub fn holes(&self) -> u32 {
        *self.holes.get_or_init(|| {
            let mut holes = 0;
            for (column, surface) in self.board.columns().zip(self.column_surfaces()) {
                let Some(surface) = *surface else { continue };
                holes += column[..surface as usize]
                    .iter()
                    .filter(|cell| cell.is_empty())
                    .count() as u32;
            }
            holes
        })
    }

    /// Sum of absolute surface differences over adjacent column pairs.
    ///
    /// Only pairs where both columns have a surface are compared; an empty
    /// column breaks the chain, so its neighbors are never compared across
    /// it.
    #[must_use]
    pub fn bumpiness(&self) -> u32 {
        *self.bumpiness.get_or_init(|| {
            self.column_surfaces()
                .windows(2)
                .map(|pair| match (pair[0], pair[1]) {
                    (Some(left), Some(right)) => (left - right).unsigned_abs(),
                    _ => 0,
                })
                .sum()
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_metrics() {
        let analysis = BoardAnalysis::from_board(&Board::new(10, 18));
        assert!(analysis.column_surfaces().iter().all(Option::is_none));
        assert_eq!(analysis.holes(), 0);
        assert_eq!(analysis.bumpiness(), 0);
    }

    #[test]
    fn test_full_board_has_no_holes() {
        let board = Board::from_ascii(
            "
            ####
            ####
            ####
            ####
            ",
        );
        let analysis = BoardAnalysis::from_board(&board);
        assert_eq!(analysis.holes(), 0);
        assert_eq!(analysis.bumpiness(), 0);
        assert!(analysis.column_surfaces().iter().all(|s| *s == Some(3)));
    }

    #[test]
    fn test_flat_surface_has_zero_bumpiness() {
        let board = Board::from_ascii(
            "
            ......
            ......
            ######
            ######
            ",
        );
        let analysis = BoardAnalysis::from_board(&board);
        assert_eq!(analysis.bumpiness(), 0);
        assert_eq!(analysis.holes(), 0);
    }

    #[test]
    fn test_staircase_metrics() {
        let board = Board::from_ascii(
            "
            #.....
            ##....
            ###...
            ####..
            #####.
            ",
        );
        let analysis = BoardAnalysis::from_board(&board);
        assert_eq!(
            analysis.column_surfaces(),
            &[Some(4), Some(3), Some(2), Some(1), Some(0), None]
        );
        // Four steps of height 1; the empty last column is not compared.
        assert_eq!(analysis.bumpiness(), 4);
        assert_eq!(analysis.holes(), 0);
    }

    #[test]
    fn test_holes_are_empties_below_the_surface() {
        let board = Board::from_ascii(
            "
            #.....
            ......
            #.#...
            ..#...
            #.#...
            ",
        );
        let analysis = BoardAnalysis::from_board(&board);
        // Column 0: surface 4, empties at y=1 and y=3 -> 2 holes.
        // Column 2: surface 2, no empties below.
        assert_eq!(analysis.holes(), 2);
        assert_eq!(
            analysis.column_surfaces(),
            &[Some(4), None, Some(2), None, None, None]
        );
    }

    #[test]
    fn test_empty_column_breaks_the_bumpiness_chain() {
        let board = Board::from_ascii(
            "
            ......
            #.....
            #.#...
            #.#...
            ",
        );
        let analysis = BoardAnalysis::from_board(&board);
        // Surfaces: [2, None, 1, None, None, None]. No adjacent pair has
        // two surfaces, so nothing is compared.
        assert_eq!(analysis.bumpiness(), 0);
    }

    #[test]
    fn test_lazy_values_are_stable() {
        let board = Board::from_ascii(
            "
            #.....
            ##....
            ##..#.
            ###.##
            ",
        );
        let analysis = BoardAnalysis::from_board(&board);
        assert_eq!(analysis.holes(), analysis.holes());
        assert_eq!(analysis.bumpiness(), analysis.bumpiness());
        assert_eq!(analysis.column_surfaces(), analysis.column_surfaces());
    }
}
