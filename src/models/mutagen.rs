use super::Tour;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

fn decay_linear(value: f64, progress: f64, multiplier: f64) -> f64 {
    value * (1.0 - progress * multiplier).max(0.0)
}

fn decay_exponential(value: f64, progress: f64, multiplier: f64, exponent: i32) -> f64 {
    value * (1.0 - progress * multiplier).max(0.0).powi(exponent)
}

// ============================================================
// Decay
// ============================================================
/// How the mutation rate changes as a run progresses from 0.0 to 1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Decay {
    #[default]
    Constant,
    Linear {
        multiplier: f64,
    },
    Exponential {
        multiplier: f64,
        exponent: i32,
    },
}

impl Decay {
    fn apply(&self, value: f64, progress: f64) -> f64 {
        match self {
            Decay::Constant => value,
            Decay::Linear { multiplier } => decay_linear(value, progress, *multiplier),
            Decay::Exponential {
                multiplier,
                exponent,
            } => decay_exponential(value, progress, *multiplier, *exponent),
        }
    }
}

// ============================================================
// MutationRate
// ============================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRate {
    value: f64,
    decay: Decay,
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
pub struct MutationRateOutOfRange(f64);

impl MutationRate {
    pub fn new(value: f64, decay: Decay) -> Result<Self, MutationRateOutOfRange> {
        let value = Self::validate(value)?;

        Ok(Self { value, decay })
    }

    pub fn constant(value: f64) -> Result<Self, MutationRateOutOfRange> {
        Self::new(value, Decay::Constant)
    }

    fn validate(value: f64) -> Result<f64, MutationRateOutOfRange> {
        if !(0.0..=1.0).contains(&value) {
            return Err(MutationRateOutOfRange(value));
        }

        Ok(value)
    }

    /// Effective rate at `progress`, always within `[0.0, 1.0]`.
    /// A decay that collapses to NaN (`0 * inf`) means no mutation.
    pub(crate) fn get(&self, progress: f64) -> f64 {
        let rate = self.decay.apply(self.value, progress);
        if rate.is_nan() {
            return 0.0;
        }

        rate.clamp(0.0, 1.0)
    }
}

// ============================================================
// Mutagen
// ============================================================
/// Swap mutation: with the effective mutation rate, exchange the points at two
/// independently drawn positions. Both draws may hit the same position, which
/// leaves the tour unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutagen {
    mutation_rate: MutationRate,
}

impl Mutagen {
    pub fn new(mutation_rate: MutationRate) -> Self {
        Self { mutation_rate }
    }

    pub fn constant(mutation_rate_value: f64) -> Result<Self, MutationRateOutOfRange> {
        Ok(Self {
            mutation_rate: MutationRate::constant(mutation_rate_value)?,
        })
    }

    #[instrument(level = "debug", skip(self, rng, tour), fields(tour_len = tour.len()))]
    pub fn mutate<R: Rng>(&self, rng: &mut R, tour: Tour, progress: f64) -> Tour {
        let mut tour = tour;
        if tour.is_empty() || !rng.random_bool(self.mutation_rate.get(progress)) {
            return tour;
        }

        let a = rng.random_range(0..tour.len());
        let b = rng.random_range(0..tour.len());
        tour.swap(a, b);
        tour
    }
}
