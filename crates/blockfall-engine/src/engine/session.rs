use crate::{
    MoveError,
    core::{board::Board, piece::PieceKind, point::Point},
    engine::{
        piece_sampler::PieceSampler,
        placement::{self, Placement},
        search,
        session_stats::SessionStats,
    },
};

/// Terminal-penalty applied to the reward of the move that tops out.
const TOP_OUT_PENALTY: i32 = -6;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Active,
    Terminal,
}

/// Result of a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub reward: i32,
    pub terminal: bool,
    pub cleared_lines: usize,
}

/// One continuous play-through: board, current piece, seeded piece
/// source, per-session counters and the Active/Terminal flag.
///
/// The session is the single owner of its board; candidates are evaluated
/// through [`preview_board`](Session::preview_board) clones, never against
/// the live grid.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    sampler: PieceSampler,
    current_piece: PieceKind,
    state: SessionState,
    stats: SessionStats,
}

impl Session {
    /// Creates a new Active session with an OS-seeded piece source.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_sampler(width, height, PieceSampler::from_os_rng())
    }

    /// Creates a session with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn with_seed(width: i32, height: i32, seed: u64) -> Self {
        Self::with_sampler(width, height, PieceSampler::from_seed(seed))
    }

    fn with_sampler(width: i32, height: i32, mut sampler: PieceSampler) -> Self {
        let board = Board::new(width, height);
        let current_piece = sampler.next_kind();
        let mut session = Self {
            board,
            sampler,
            current_piece,
            state: SessionState::Active,
            stats: SessionStats::new(),
        };
        // A very narrow board can refuse even the first spawn.
        if !placement::is_legal(
            &session.board,
            session.current_piece,
            Placement::spawn(session.spawn_point()),
        ) {
            session.state = SessionState::Terminal;
        }
        session
    }

    /// Discards this session and starts a brand-new Active one with the
    /// same dimensions and a fresh OS-seeded piece source.
    pub fn reset(&mut self) {
        *self = Self::new(self.board.width(), self.board.height());
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_piece(&self) -> PieceKind {
        self.current_piece
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Where the current piece enters the board: horizontally centered,
    /// one row above the highest stacked tile (clamped below the top).
    #[must_use]
    pub fn spawn_point(&self) -> Point {
        Point::new(
            self.board.width() / 2 - 1,
            i32::min(self.board.height() - 2, self.board.highest_tile() + 1),
        )
    }

    /// Every resting placement of the current piece reachable from the
    /// spawn configuration. Empty once the session is terminal.
    ///
    /// The set is the complete legal action space for the next move; the
    /// session does not rank it.
    #[must_use]
    pub fn legal_placements(&self) -> Vec<Placement> {
        if self.state.is_terminal() {
            return Vec::new();
        }
        search::reachable_placements(&self.board, self.current_piece, self.spawn_point())
    }

    /// Validates that `placement` may be committed right now: supported
    /// orientation, active session, and membership in the reachable set.
    fn validate(&self, placement: Placement) -> Result<(), MoveError> {
        if !self.current_piece.supports(placement.orientation) {
            return Err(MoveError::InvalidOrientation);
        }
        if self.state.is_terminal() || !self.legal_placements().contains(&placement) {
            return Err(MoveError::IllegalMove);
        }
        Ok(())
    }

    /// Commits a placement of the current piece.
    ///
    /// Clears filled rows, updates the counters, samples the next piece
    /// and checks its spawn; an illegal spawn flips the session to
    /// Terminal (absorbing). Returns the move's reward, the terminal flag
    /// and the number of lines cleared.
    ///
    /// Fails with [`MoveError::IllegalMove`] (or
    /// [`MoveError::InvalidOrientation`]) without touching the board when
    /// `placement` is not in the current legal set.
    pub fn commit(&mut self, placement: Placement) -> Result<MoveOutcome, MoveError> {
        self.validate(placement)?;

        let cleared = placement::apply(&mut self.board, self.current_piece, placement)?;
        self.stats.complete_placement(cleared);

        self.current_piece = self.sampler.next_kind();
        if !placement::is_legal(
            &self.board,
            self.current_piece,
            Placement::spawn(self.spawn_point()),
        ) {
            self.state = SessionState::Terminal;
        }

        let terminal = self.state.is_terminal();
        let k = cleared as i32;
        let mut reward = 2 * k * k + (self.board.height() - self.board.highest_tile());
        if terminal {
            reward += TOP_OUT_PENALTY;
        }
        Ok(MoveOutcome {
            reward,
            terminal,
            cleared_lines: cleared,
        })
    }

    /// The board as it would look after committing `placement`, plus the
    /// lines the move would clear. The live session is untouched.
    ///
    /// Validation is identical to [`commit`](Session::commit).
    pub fn preview_board(&self, placement: Placement) -> Result<(Board, usize), MoveError> {
        self.validate(placement)?;
        placement::preview(&self.board, self.current_piece, placement)
    }
}
