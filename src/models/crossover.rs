use super::{Point, PointId, Tour};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

/// Order crossover over the inclusive segment `[start, end]`.
///
/// The segment is copied from `parent1` verbatim. The remaining slots are filled
/// left to right from position 0 with `parent2`'s points in `parent2`'s order,
/// skipping points the segment already placed.
#[instrument(level = "debug", skip(parent1, parent2), fields(tour_len = parent1.len()))]
fn crossover_order(parent1: &Tour, parent2: &Tour, start: usize, end: usize) -> Tour {
    let segment = &parent1.points()[start..=end];
    let placed: HashSet<PointId> = segment.iter().map(|point| point.id).collect();

    let mut donors = parent2
        .points()
        .iter()
        .filter(|point| !placed.contains(&point.id));

    let mut child: Vec<Arc<Point>> = Vec::with_capacity(parent1.len());
    for position in 0..parent1.len() {
        let point = if (start..=end).contains(&position) {
            Some(&parent1.points()[position])
        } else {
            donors.next()
        };
        child.extend(point.cloned());
    }

    Tour::new(child)
}

/// Order crossover (OX) applied with a given probability.
///
/// When the crossover does not fire, the child is a copy of the first parent.
/// This asexual path is part of the search dynamics; the copy still goes
/// through mutation afterwards.
///
/// ```rust
/// use fx_tour_ga::models::Crossover;
///
/// let crossover = Crossover::order(0.8)?;
/// assert_eq!(crossover.rate(), 0.8);
///
/// assert!(Crossover::order(1.5).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crossover {
    rate: f64,
}

/// Error returned when the crossover rate is outside `[0.0, 1.0]`.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
#[error("crossover rate must be between 0.0 and 1.0, got {0}")]
pub struct ProbabilityOutOfRangeError(f64);

impl Crossover {
    /// Creates an order crossover that recombines with probability `rate`.
    pub fn order(rate: f64) -> Result<Self, ProbabilityOutOfRangeError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(ProbabilityOutOfRangeError(rate));
        }

        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Recombines two parent tours into one child tour.
    #[instrument(level = "debug", skip(self, rng, parent1, parent2), fields(rate = self.rate, tour_len = parent1.len()))]
    pub fn apply<R: Rng>(&self, rng: &mut R, parent1: &Tour, parent2: &Tour) -> Tour {
        if parent1.is_empty() || !rng.random_bool(self.rate) {
            return parent1.clone();
        }

        let n = parent1.len();
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        crossover_order(parent1, parent2, a.min(b), a.max(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tour::test_utilities::shared;
    use rand::seq::SliceRandom;
    use rand::{SeedableRng, rngs::StdRng};

    fn line(n: usize) -> Vec<Arc<Point>> {
        let coordinates: Vec<(f64, f64)> = (0..n).map(|i| (i as f64, (i * i) as f64)).collect();
        shared(&coordinates)
    }

    fn reordered(points: &[Arc<Point>], order: &[usize]) -> Tour {
        Tour::new(order.iter().map(|&i| points[i].clone()).collect())
    }

    fn ids(tour: &Tour) -> Vec<u32> {
        tour.ids().into_iter().map(|id| id.0).collect()
    }

    #[test]
    fn it_performs_order_crossover() {
        let points = line(6);
        let parent1 = reordered(&points, &[0, 1, 2, 3, 4, 5]);
        let parent2 = reordered(&points, &[5, 4, 3, 2, 1, 0]);

        let child = crossover_order(&parent1, &parent2, 2, 3);
        assert_eq!(ids(&child), vec![5, 4, 2, 3, 1, 0]);

        let child = crossover_order(&parent1, &parent2, 1, 4);
        assert_eq!(ids(&child), vec![5, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn it_copies_a_single_position_when_the_segment_collapses() {
        let points = line(5);
        let parent1 = reordered(&points, &[2, 0, 4, 1, 3]);
        let parent2 = reordered(&points, &[0, 1, 2, 3, 4]);

        let child = crossover_order(&parent1, &parent2, 0, 0);
        assert_eq!(ids(&child), vec![2, 0, 1, 3, 4]);

        let child = crossover_order(&parent1, &parent2, 4, 4);
        assert_eq!(ids(&child), vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn it_copies_parent1_when_the_segment_spans_everything() {
        let points = line(4);
        let parent1 = reordered(&points, &[3, 1, 0, 2]);
        let parent2 = reordered(&points, &[0, 1, 2, 3]);

        assert_eq!(crossover_order(&parent1, &parent2, 0, 3), parent1);
    }

    #[test]
    fn it_passes_parent1_through_at_rate_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = line(8);
        let parent1 = reordered(&points, &[7, 2, 5, 0, 1, 6, 3, 4]);
        let parent2 = reordered(&points, &[0, 1, 2, 3, 4, 5, 6, 7]);
        let crossover = Crossover::order(0.0).unwrap();

        for _ in 0..50 {
            assert_eq!(crossover.apply(&mut rng, &parent1, &parent2), parent1);
        }
    }

    #[test]
    fn it_always_produces_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = line(12);

        for rate in [0.0, 0.5, 1.0] {
            let crossover = Crossover::order(rate).unwrap();
            for _ in 0..200 {
                let mut order1: Vec<usize> = (0..12).collect();
                let mut order2 = order1.clone();
                order1.shuffle(&mut rng);
                order2.shuffle(&mut rng);

                let child = crossover.apply(
                    &mut rng,
                    &reordered(&points, &order1),
                    &reordered(&points, &order2),
                );
                assert!(child.is_permutation_of(&points));
            }
        }
    }

    #[test]
    fn it_validates_crossover_rate() {
        assert_eq!(
            Crossover::order(-0.1),
            Err(ProbabilityOutOfRangeError(-0.1))
        );
        assert!(Crossover::order(1.5).is_err());
        assert!(Crossover::order(f64::NAN).is_err());
        assert!(Crossover::order(0.0).is_ok());
        assert!(Crossover::order(1.0).is_ok());
    }
}
