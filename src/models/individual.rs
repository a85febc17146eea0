use super::{Tour, fitness};

/// One candidate tour with its derived length and fitness.
///
/// Individuals are immutable snapshots: offspring are always new values and
/// nothing changes a tour after its length has been measured.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    tour: Tour,
    length: f64,
    fitness: f64,
}

impl Individual {
    pub fn new(tour: Tour) -> Self {
        let length = tour.length();

        Self {
            tour,
            length,
            fitness: fitness(length),
        }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}
