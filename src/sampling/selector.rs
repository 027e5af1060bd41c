//! Seeded weighted index selection

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weighted random selection
    ///
    /// Returns an index into `weights` with probability proportional to its
    /// weight. Zero and negative weights are never returned; `None` when no
    /// weight is positive.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|&&w| w > 0.0).sum();
        if total <= 0.0 {
            return None;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        let mut last_positive = None;
        for (i, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            if rand_val < weight {
                return Some(i);
            }
            rand_val -= weight;
            last_positive = Some(i);
        }

        // Floating point drift can leave a sliver past the final bucket
        last_positive
    }
}
