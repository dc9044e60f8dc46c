//! The simulation-wide random generator.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, created once before the first tick and
//! handed by `&mut` to every stochastic draw (arrival gaps, severities,
//! treatment durations).  It is never reseeded mid-run and never reached
//! through global state, so a fixed seed replays the same run on the same
//! RNG back-end.  Bit-exact replay across different `rand` versions or
//! platforms is not promised (`SmallRng` is not a portable algorithm).

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};

/// Single-threaded simulation RNG.
pub struct SimRng {
    rng:  SmallRng,
    seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system.  The drawn seed is kept so the run can
    /// be reported and replayed.
    pub fn from_os() -> Self {
        Self::new(OsRng.next_u64())
    }

    /// Seed from `seed`, or from the operating system when `None`.
    pub fn from_seed_or_os(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_os(),
        }
    }

    /// The seed this generator was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }
}
