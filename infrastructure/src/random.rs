//! `rand`-backed implementation of the domain [`RandomSource`] port.

use quotebox_domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub struct StdRandomSource {
    rng: Mutex<StdRng>,
}

impl StdRandomSource {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Use `seed` when given, otherwise entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for StdRandomSource {
    fn next_index(&self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..upper),
            Err(_) => 0,
        }
    }
}
