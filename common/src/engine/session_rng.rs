use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for one client session. Always constructed from an explicit
/// seed so randomized bot behavior can be reproduced exactly.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_f64(&mut self) -> f64 {
        self.rng.random()
    }

    /// Uniform index into a non-empty collection of length `len`.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
