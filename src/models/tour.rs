use super::point::{Point, PointId, distance};
use std::collections::HashSet;
use std::sync::Arc;

/// An ordered visit of every point exactly once, read as a closed cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour(Vec<Arc<Point>>);

impl Tour {
    pub fn new(points: Vec<Arc<Point>>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[Arc<Point>] {
        &self.0
    }

    pub fn ids(&self) -> Vec<PointId> {
        self.0.iter().map(|point| point.id).collect()
    }

    /// Cyclic length: the last point connects back to the first.
    /// Tours with fewer than two points have no edges.
    pub fn length(&self) -> f64 {
        let n = self.0.len();
        if n < 2 {
            return 0.0;
        }

        (0..n)
            .map(|i| distance(&self.0[i], &self.0[(i + 1) % n]))
            .sum()
    }

    /// True when the tour visits every point of `points` exactly once.
    pub fn is_permutation_of(&self, points: &[Arc<Point>]) -> bool {
        if self.0.len() != points.len() {
            return false;
        }

        let expected: HashSet<PointId> = points.iter().map(|point| point.id).collect();
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0
            .iter()
            .all(|point| expected.contains(&point.id) && seen.insert(point.id))
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.0.iter().map(|point| Point::clone(point)).collect()
    }
}

impl From<Vec<Arc<Point>>> for Tour {
    fn from(points: Vec<Arc<Point>>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
pub(crate) mod test_utilities {
    use super::*;

    pub(crate) fn shared(points: &[(f64, f64)]) -> Vec<Arc<Point>> {
        points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Arc::new(Point::new(id as u32, x, y)))
            .collect()
    }

    pub(crate) fn unit_square() -> Vec<Arc<Point>> {
        shared(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    /// A two point tour whose cyclic length is exactly `length`.
    pub(crate) fn tour_with_length(length: f64) -> Tour {
        Tour::new(shared(&[(0.0, 0.0), (length / 2.0, 0.0)]))
    }
}
