use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `len` success messages.
pub trait MessagePicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform pseudo-random choice.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl MessagePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.checked_rem(len).unwrap_or(0)
    }
}
