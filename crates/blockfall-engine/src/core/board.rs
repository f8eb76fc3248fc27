use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::MoveError;

use super::{piece::PieceKind, point::Point};

/// A single cell of the board.
///
/// The piece kind stored in an occupied cell is cosmetic (it picks the
/// rendering color); occupancy is the only gameplay-relevant information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The play field: a column-major grid of [`Cell`].
///
/// Dimensions are fixed at construction. `(0, 0)` is the bottom-left
/// cell; `y` grows upward. The board exclusively owns its grid, so
/// `clone()` yields a fully independent copy (used by the preview path).
///
/// # `highest_tile`
///
/// The board maintains the row index of the highest occupied cell
/// incrementally: `-1` while the board is empty, raised by [`place`],
/// lowered by the number of rows removed in [`clear_filled_rows`]. The
/// maintained value is an upper bound on the true highest occupied row
/// (removing a piece does not lower it), never an underestimate.
///
/// [`place`]: Board::place
/// [`clear_filled_rows`]: Board::clear_filled_rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    columns: Vec<Vec<Cell>>,
    highest_tile: i32,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are at least 4 (every shape spans a
    /// 4×4 box).
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width >= 4 && height >= 4, "board must be at least 4x4");
        let columns = vec![vec![Cell::Empty; height as usize]; width as usize];
        Self {
            width,
            height,
            columns,
            highest_tile: -1,
        }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Row index of the highest occupied cell; see the type-level notes
    /// on the upper-bound semantics. `-1` on an empty board.
    #[must_use]
    pub fn highest_tile(&self) -> i32 {
        self.highest_tile
    }

    #[must_use]
    pub fn is_out_of_bounds(&self, point: Point) -> bool {
        !(0..self.width).contains(&point.x) || !(0..self.height).contains(&point.y)
    }

    /// The cell at `point`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, point: Point) -> Option<Cell> {
        if self.is_out_of_bounds(point) {
            return None;
        }
        Some(self.columns[point.x as usize][point.y as usize])
    }

    /// Cells of column `x`, bottom to top.
    ///
    /// # Panics
    ///
    /// Panics when `x` is out of range.
    #[must_use]
    pub fn column(&self, x: i32) -> &[Cell] {
        &self.columns[usize::try_from(x).expect("column index out of range")]
    }

    /// Iterator over all columns, left to right (each bottom to top).
    pub fn columns(&self) -> impl Iterator<Item = &[Cell]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: i32) -> impl Iterator<Item = Cell> + '_ {
        let y = usize::try_from(y).expect("row index out of range");
        self.columns.iter().map(move |column| column[y])
    }

    /// Whether a shape placed with `anchor` lies fully in bounds and on
    /// empty cells.
    #[must_use]
    pub fn is_legal_placement(&self, offsets: &[Point; 4], anchor: Point) -> bool {
        offsets
            .iter()
            .all(|&offset| self.cell(anchor + offset).is_some_and(Cell::is_empty))
    }

    /// Writes a shape into the grid and raises `highest_tile` to the top
    /// row touched.
    ///
    /// Legality is validated first; on `Err` the grid is untouched.
    pub fn place(
        &mut self,
        offsets: &[Point; 4],
        anchor: Point,
        kind: PieceKind,
    ) -> Result<(), MoveError> {
        if !self.is_legal_placement(offsets, anchor) {
            return Err(MoveError::IllegalMove);
        }
        for &offset in offsets {
            let cell = anchor + offset;
            self.columns[cell.x as usize][cell.y as usize] = Cell::Piece(kind);
            if cell.y > self.highest_tile {
                self.highest_tile = cell.y;
            }
        }
        Ok(())
    }

    /// Erases a previously placed shape.
    ///
    /// `highest_tile` is intentionally left as-is; the upper-bound
    /// invariant tolerates the inflation.
    pub fn remove(&mut self, offsets: &[Point; 4], anchor: Point) {
        for &offset in offsets {
            let cell = anchor + offset;
            debug_assert!(!self.is_out_of_bounds(cell));
            self.columns[cell.x as usize][cell.y as usize] = Cell::Empty;
        }
    }

    #[must_use]
    fn is_row_filled(&self, y: i32) -> bool {
        self.row(y).all(|cell| !cell.is_empty())
    }

    /// Removes every completely filled row and appends as many empty rows
    /// at the top. Returns the number of rows removed.
    ///
    /// Filled rows are detected in one pass over the pre-clear grid, then
    /// each column is compacted once (top-most filled row first, so lower
    /// indices stay valid during removal).
    pub fn clear_filled_rows(&mut self) -> usize {
        let filled: Vec<i32> = (0..self.height).filter(|&y| self.is_row_filled(y)).collect();
        if filled.is_empty() {
            return 0;
        }
        for column in &mut self.columns {
            for &y in filled.iter().rev() {
                column.remove(y as usize);
                column.push(Cell::Empty);
            }
        }
        self.highest_tile -= filled.len() as i32;
        filled.len()
    }

    /// Creates a board from ASCII art for testing.
    ///
    /// `#` is an occupied cell, `.` an empty cell; rows are given top to
    /// bottom. All rows must have the same width.
    ///
    /// # Panics
    ///
    /// Panics on ragged rows or a grid smaller than 4×4.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        let rows: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.chars().filter(|c| *c == '#' || *c == '.').collect())
            .collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, Vec::len) as i32;
        let mut board = Self::new(width, height);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len() as i32,
                width,
                "each row must have exactly {width} cells, got {} at row {i}",
                row.len(),
            );
            let y = height - 1 - i as i32;
            for (x, &ch) in row.iter().enumerate() {
                if ch == '#' {
                    board.columns[x][y as usize] = Cell::Piece(PieceKind::O);
                    if y > board.highest_tile {
                        board.highest_tile = y;
                    }
                }
            }
        }
        board
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: "WxH:row,row,..." with rows top to bottom, one char per
        // cell ('.' empty, piece letter otherwise).
        let mut text = String::with_capacity((self.width as usize + 1) * self.height as usize + 8);
        write!(&mut text, "{}x{}:", self.width, self.height).unwrap();
        for y in (0..self.height).rev() {
            for cell in self.row(y) {
                text.push(match cell {
                    Cell::Empty => '.',
                    Cell::Piece(kind) => kind.as_char(),
                });
            }
            if y > 0 {
                text.push(',');
            }
        }
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let (dims, grid) = s.split_once(':').ok_or_else(|| {
            serde::de::Error::custom(format!("expected format 'WxH:rows', got '{s}'"))
        })?;
        let (w, h) = dims
            .split_once('x')
            .ok_or_else(|| serde::de::Error::custom(format!("invalid dimensions '{dims}'")))?;
        let width: i32 = w
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid width '{w}' ({e})")))?;
        let height: i32 = h
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid height '{h}' ({e})")))?;
        if width < 4 || height < 4 {
            return Err(serde::de::Error::custom(format!(
                "board must be at least 4x4, got {width}x{height}"
            )));
        }

        let rows: Vec<&str> = grid.split(',').collect();
        if rows.len() as i32 != height {
            return Err(serde::de::Error::custom(format!(
                "expected {height} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::new(width, height);
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return Err(serde::de::Error::custom(format!(
                    "expected {width} cells at row {i}, got {}",
                    row.chars().count()
                )));
            }
            let y = height - 1 - i as i32;
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_char(ch).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid cell '{ch}' at row {i}"))
                })?;
                board.columns[x][y as usize] = Cell::Piece(kind);
                if y > board.highest_tile {
                    board.highest_tile = y;
                }
            }
        }
        Ok(board)
    }
}
