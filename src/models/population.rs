use super::{Individual, Point, Tour};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Length statistics over one population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PopulationStats {
    pub best_length: f64,
    pub mean_length: f64,
    pub worst_length: f64,
}

/// The individuals of one generation.
///
/// Ties between equally long tours are always resolved by population order:
/// [`Population::fittest`] returns the first of them, which is also the head
/// of [`Population::sorted_by_length`] since that sort is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub(crate) fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Builds `size` individuals, each from its own uniform shuffle of `points`.
    #[instrument(level = "debug", skip(points, rng), fields(num_points = points.len()))]
    pub fn random<R: Rng>(points: &[Arc<Point>], size: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| {
                let mut order = points.to_vec();
                order.shuffle(rng);
                Individual::new(Tour::new(order))
            })
            .collect();

        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// The shortest tour; the first one in population order on ties.
    pub fn fittest(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .min_by(|a, b| a.length().total_cmp(&b.length()))
    }

    /// Stable sort by length ascending.
    pub fn sorted_by_length(&self) -> Vec<&Individual> {
        let mut sorted: Vec<&Individual> = self.individuals.iter().collect();
        sorted.sort_by(|a, b| a.length().total_cmp(&b.length()));
        sorted
    }

    pub fn total_fitness(&self) -> f64 {
        self.individuals.iter().map(Individual::fitness).sum()
    }

    pub fn stats(&self) -> Option<PopulationStats> {
        let best_length = self.fittest()?.length();
        let worst_length = self
            .individuals
            .iter()
            .map(Individual::length)
            .fold(f64::NEG_INFINITY, f64::max);
        let mean_length = self.individuals.iter().map(Individual::length).sum::<f64>()
            / self.individuals.len() as f64;

        Some(PopulationStats {
            best_length,
            mean_length,
            worst_length,
        })
    }
}
