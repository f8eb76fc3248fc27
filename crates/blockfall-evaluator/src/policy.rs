//! Baseline decision policies and a bounded session runner.
//!
//! These are deliberately trivial engine consumers: they pick a placement
//! from [`Session::legal_placements`] without scoring the board. A learning
//! agent replaces them by implementing [`Policy`] itself.

use blockfall_engine::{Placement, Session, SessionStats};
use rand::{SeedableRng as _, rngs::StdRng, seq::IndexedRandom as _};

/// Chooses a placement for the current session state.
///
/// Returns `None` when no legal placement exists (the session is
/// terminal). Object-safe so it can be used as `Box<dyn Policy>`.
pub trait Policy {
    fn choose(&mut self, session: &Session) -> Option<Placement>;
}

/// Picks uniformly among the legal placements.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, session: &Session) -> Option<Placement> {
        session.legal_placements().choose(&mut self.rng).copied()
    }
}

/// Picks the placement with the lowest anchor row, first found winning
/// ties.
#[derive(Debug, Default)]
pub struct LowestPlacementPolicy;

impl Policy for LowestPlacementPolicy {
    fn choose(&mut self, session: &Session) -> Option<Placement> {
        session
            .legal_placements()
            .into_iter()
            .min_by_key(|placement| placement.anchor.y)
    }
}

/// Drives `session` with `policy` until it tops out or `turn_limit` moves
/// have been committed. Returns a snapshot of the final counters.
pub fn run_session(
    policy: &mut dyn Policy,
    session: &mut Session,
    turn_limit: usize,
) -> SessionStats {
    for _ in 0..turn_limit {
        let Some(placement) = policy.choose(session) else {
            break;
        };
        let Ok(outcome) = session.commit(placement) else {
            break;
        };
        if outcome.terminal {
            break;
        }
    }
    session.stats().clone()
}
