/// Seeded pseudo-random generator for reproducible blip placement.
///
/// One instance is created per layout run (never a process-wide singleton),
/// so two radars laid out in the same process cannot disturb each other's
/// sequences. Integer-only arithmetic keeps the sequence bit-for-bit
/// identical across platforms.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

/// Seed used at the start of every layout run. Fixed so that repeated runs
/// over identical input produce identical seed positions.
pub const LAYOUT_SEED: u64 = 42;

// Knuth's MMIX LCG constants.
const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1). The high 24 bits of the LCG state feed the
    /// mantissa, so every value is exactly representable as f32.
    pub fn random(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform value in [min, max).
    pub fn random_between(&mut self, min: f32, max: f32) -> f32 {
        min + self.random() * (max - min)
    }

    /// Center-weighted value in [min, max): the mean of two uniform draws.
    ///
    /// This is the original radar's cheap triangular approximation of a bell
    /// curve, kept as-is. A true Gaussian sampler would change every seed
    /// position, so do not "fix" it.
    pub fn normal_between(&mut self, min: f32, max: f32) -> f32 {
        min + (self.random() + self.random()) * 0.5 * (max - min)
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::new(LAYOUT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_are_reproducible() {
        let mut a = SeededRng::new(LAYOUT_SEED);
        let mut b = SeededRng::new(LAYOUT_SEED);
        for _ in 0..1000 {
            assert_eq!(a.random().to_bits(), b.random().to_bits());
        }
    }

    #[test]
    fn random_stays_in_unit_interval() {
        let mut rng = SeededRng::new(7);
        for _ in 0..10_000 {
            let v = rng.random();
            assert!((0.0..1.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn random_between_respects_bounds() {
        let mut rng = SeededRng::default();
        for _ in 0..1000 {
            let v = rng.random_between(130.0, 220.0);
            assert!((130.0..220.0).contains(&v));
        }
    }

    #[test]
    fn normal_between_clusters_toward_center() {
        let mut rng = SeededRng::default();
        let n = 10_000;
        let mut center = 0usize;
        for _ in 0..n {
            let v = rng.normal_between(0.0, 1.0);
            assert!((0.0..1.0).contains(&v));
            if (0.25..0.75).contains(&v) {
                center += 1;
            }
        }
        // A triangular distribution puts 75% of mass in the middle half;
        // uniform would put 50%.
        assert!(center as f32 / n as f32 > 0.65);
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        assert_ne!(a.random().to_bits(), b.random().to_bits());
    }
}
