use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::PieceKind;

/// The per-session piece source.
///
/// Samples kinds uniformly and independently (no bag); each session owns
/// its own generator so that sessions never influence each other.
#[derive(Debug, Clone)]
pub struct PieceSampler {
    rng: Pcg64Mcg,
}

impl PieceSampler {
    /// Creates a sampler seeded from the OS's random data source.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: Pcg64Mcg::from_os_rng(),
        }
    }

    /// Creates a sampler with a fixed seed, for reproducible sessions.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Samples the next piece kind.
    pub fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }
}
