use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the angular scatter applied to new blips.
pub trait JitterSource: Send {
    /// Returns an offset within `[-spread, spread]`.
    fn offset(&mut self, spread: f64) -> f64;
}

/// Pseudo-random jitter; reproducible when built from a seed.
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for SeededJitter {
    fn offset(&mut self, spread: f64) -> f64 {
        if spread.is_nan() || spread <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-spread..=spread)
    }
}

/// Constant offset, clamped into the requested spread. Useful for replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn offset(&mut self, spread: f64) -> f64 {
        let spread = spread.max(0.0);
        self.0.clamp(-spread, spread)
    }
}
