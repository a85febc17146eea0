use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Controls how far a run may advance.
///
/// The ceiling is a safety bound on the number of generations, not a
/// convergence criterion: a run keeps going on a fitness plateau until the
/// ceiling is reached.
///
/// ```rust
/// use fx_tour_ga::models::Schedule;
///
/// let schedule = Schedule::generational(1000);
/// assert_eq!(schedule.max_generations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of generations after which the run stops advancing.
    pub max_generations: u32,
}

/// Decision about what to do with the generation that just completed.
#[derive(Debug, PartialEq, Eq)]
pub enum ScheduleDecision {
    /// Breed the next generation.
    Advance { next_generation: u32 },
    /// The ceiling is reached; the run state stays valid and queryable.
    Terminate,
}

impl Schedule {
    pub fn generational(max_generations: u32) -> Self {
        Self { max_generations }
    }

    #[instrument(level = "debug", skip(self), fields(max_generations = self.max_generations))]
    pub(crate) fn decide(&self, generation: u32) -> ScheduleDecision {
        if generation >= self.max_generations {
            return ScheduleDecision::Terminate;
        }

        ScheduleDecision::Advance {
            next_generation: generation + 1,
        }
    }

    /// Fraction of the ceiling already used, from 0.0 to 1.0.
    pub(crate) fn progress(&self, generation: u32) -> f64 {
        if self.max_generations == 0 {
            return 1.0;
        }

        (generation as f64 / self.max_generations as f64).min(1.0)
    }
}
