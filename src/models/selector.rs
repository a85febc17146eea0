//! Parent selection for the breeding loop.
//!
//! Two methods are available:
//!
//! - **Roulette wheel** (the default) picks an individual with probability
//!   proportional to its fitness, so shorter tours are chosen more often while
//!   every tour keeps a non-zero chance.
//! - **Tournament** draws `size` individuals uniformly with replacement and keeps
//!   the shortest. Larger tournaments mean stronger selection pressure.
//!
//! ```rust
//! use fx_tour_ga::models::Selector;
//!
//! let roulette = Selector::roulette();
//! let tournament = Selector::tournament(3)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::Individual;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Performs a single roulette wheel spin to select an individual index.
///
/// Floating point rounding can leave the running sum just below the spin when
/// it lands at the very end of the wheel; the last individual is returned then.
fn spin_roulette<R: Rng>(individuals: &[Individual], total_fitness: f64, rng: &mut R) -> usize {
    let spin = rng.random_range(0.0..total_fitness);
    let mut cumulative = 0.0;

    for (index, individual) in individuals.iter().enumerate() {
        cumulative += individual.fitness();
        if cumulative >= spin {
            return index;
        }
    }

    individuals.len() - 1
}

/// Draws `size` contenders with replacement and returns the shortest.
/// Ties keep the earliest drawn contender.
fn run_tournament<R: Rng>(individuals: &[Individual], size: usize, rng: &mut R) -> usize {
    let mut winner = rng.random_range(0..individuals.len());
    for _ in 1..size {
        let challenger = rng.random_range(0..individuals.len());
        if individuals[challenger].length() < individuals[winner].length() {
            winner = challenger;
        }
    }

    winner
}

/// Errors for selector configuration.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectionError {
    /// A tournament needs at least one contender.
    #[error("InvalidTournamentSize: tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),
}

/// How parents are drawn from the previous generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Selector {
    /// Fitness-proportionate selection.
    #[default]
    Roulette,
    /// Best of `size` uniformly drawn contenders.
    Tournament { size: usize },
}

impl Selector {
    pub fn roulette() -> Self {
        Self::Roulette
    }

    pub fn tournament(size: usize) -> Result<Self, SelectionError> {
        let selector = Self::Tournament { size };
        selector.validate()?;

        Ok(selector)
    }

    pub(crate) fn validate(&self) -> Result<(), SelectionError> {
        match self {
            Self::Tournament { size } if *size == 0 => {
                Err(SelectionError::InvalidTournamentSize(*size))
            }
            _ => Ok(()),
        }
    }

    /// Selects one parent. Only `None` for an empty population.
    #[instrument(level = "debug", skip(self, rng, individuals), fields(method = ?self, num_candidates = individuals.len()))]
    pub fn select<'a, R: Rng>(
        &self,
        rng: &mut R,
        individuals: &'a [Individual],
    ) -> Option<&'a Individual> {
        if individuals.is_empty() {
            return None;
        }

        let index = match self {
            Self::Roulette => {
                let total_fitness: f64 = individuals.iter().map(Individual::fitness).sum();
                if total_fitness > 0.0 && total_fitness.is_finite() {
                    spin_roulette(individuals, total_fitness, rng)
                } else {
                    // Fitness is positive by construction; only reachable through overflow
                    rng.random_range(0..individuals.len())
                }
            }
            Self::Tournament { size } => run_tournament(individuals, *size, rng),
        };

        individuals.get(index)
    }
}
