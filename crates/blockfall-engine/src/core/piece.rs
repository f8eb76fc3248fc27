use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Orientation of a piece.
///
/// Named after the compass-style directions the shape tables are keyed by.
/// `Right` is the spawn orientation. How many of the four tags denote
/// distinct shapes depends on the piece kind; see [`PieceKind::rotations`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    Up = 0,
    #[default]
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Orientation {
    /// Number of orientation tags (4).
    pub const LEN: usize = 4;

    const fn as_usize(self) -> usize {
        self as usize
    }
}

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    /// O-piece (2×2 square).
    O = 0,
    /// T-piece.
    T = 1,
    /// L-piece.
    L = 2,
    /// J-piece.
    J = 3,
    /// I-piece.
    I = 4,
    /// S-piece.
    S = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        match rng.random_range(0..=6) {
            0 => PieceKind::O,
            1 => PieceKind::T,
            2 => PieceKind::L,
            3 => PieceKind::J,
            4 => PieceKind::I,
            5 => PieceKind::S,
            _ => PieceKind::Z,
        }
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All piece kinds, in table order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Number of distinct rotation states of this piece kind.
    ///
    /// This is a fixed table, not derived from the shape geometry: J is
    /// deliberately a 2-cycle (its other two listed shapes are never
    /// reached by rotation inputs).
    #[must_use]
    pub const fn rotations(self) -> u8 {
        match self {
            PieceKind::O => 1,
            PieceKind::T | PieceKind::L => 4,
            PieceKind::J | PieceKind::I | PieceKind::S | PieceKind::Z => 2,
        }
    }

    /// Whether `orientation` is a valid state for this piece kind.
    ///
    /// Pieces with two rotation states cycle between `Up` and `Right`
    /// only; a one-state piece accepts every tag (they all resolve to the
    /// same shape).
    #[must_use]
    pub const fn supports(self, orientation: Orientation) -> bool {
        self.rotations() != 2 || matches!(orientation, Orientation::Up | Orientation::Right)
    }

    /// The four cell offsets of this piece in the given orientation,
    /// relative to the placement anchor.
    #[must_use]
    pub fn offsets(self, orientation: Orientation) -> [Point; 4] {
        SHAPES[self as usize][orientation.as_usize()]
    }

    /// Orientations reachable from `orientation` by a single rotation
    /// input.
    ///
    /// An explicit lookup table. The 4-state adjacency is irregular (not
    /// a plain ring): `Up` and `Down` both step to `{Right, Left}`, and
    /// `Right`/`Left` both step to `{Up, Down}`, because geometrically
    /// equivalent intermediate states were collapsed. A 2-state piece
    /// flips between `Up` and `Right`; a 1-state piece only steps to
    /// itself. Unsupported orientations of a 2-state piece have no
    /// rotation successors.
    #[must_use]
    pub fn rotation_neighbors(self, orientation: Orientation) -> &'static [Orientation] {
        match (self.rotations(), orientation) {
            (1, Orientation::Up) => &[Orientation::Up],
            (1, Orientation::Right) => &[Orientation::Right],
            (1, Orientation::Down) => &[Orientation::Down],
            (1, Orientation::Left) => &[Orientation::Left],
            (2, Orientation::Up) => &[Orientation::Right],
            (2, Orientation::Right) => &[Orientation::Up],
            (2, _) => &[],
            (_, Orientation::Up | Orientation::Down) => &[Orientation::Right, Orientation::Left],
            (_, Orientation::Right | Orientation::Left) => &[Orientation::Up, Orientation::Down],
        }
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::I => 'I',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'I' => Some(PieceKind::I),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Shape offsets per (kind, orientation), indexed `[kind][orientation]`.
///
/// Copied verbatim from the reference tables, including the duplicate
/// entries of collapsed orientations. All offsets are non-negative and fit
/// a 4×4 box above-and-right of the anchor.
const SHAPES: [[[Point; 4]; Orientation::LEN]; PieceKind::LEN] = {
    const fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    const O: [Point; 4] = [p(0, 0), p(1, 0), p(0, 1), p(1, 1)];
    const I_V: [Point; 4] = [p(2, 0), p(2, 1), p(2, 2), p(2, 3)];
    const I_H: [Point; 4] = [p(0, 2), p(1, 2), p(2, 2), p(3, 2)];
    const S_V: [Point; 4] = [p(0, 1), p(0, 2), p(1, 1), p(1, 0)];
    const S_H: [Point; 4] = [p(0, 0), p(1, 0), p(1, 1), p(2, 1)];
    const Z_V: [Point; 4] = [p(1, 0), p(1, 1), p(2, 1), p(2, 2)];
    const Z_H: [Point; 4] = [p(0, 1), p(1, 0), p(1, 1), p(2, 0)];

    [
        // O-piece: one distinct shape
        [O, O, O, O],
        // T-piece: [up, right, down, left]
        [
            [p(0, 0), p(1, 0), p(1, 1), p(2, 0)],
            [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
            [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
            [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
        ],
        // L-piece
        [
            [p(0, 0), p(1, 0), p(2, 0), p(2, 1)],
            [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
            [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
            [p(1, 0), p(1, 1), p(1, 2), p(0, 2)],
        ],
        // J-piece (only up/right are reachable; down/left kept as listed)
        [
            [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
            [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
            [p(0, 1), p(1, 1), p(2, 1), p(2, 0)],
            [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
        ],
        // I-piece: up/down vertical, right/left horizontal
        [I_V, I_H, I_V, I_H],
        // S-piece
        [S_V, S_H, S_V, S_H],
        // Z-piece
        [Z_V, Z_H, Z_V, Z_H],
    ]
};
