use super::Bounds;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

/// Identity of a point within a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable 2D coordinate with an identity.
///
/// Points are created once per run and shared between tours behind an `Arc`,
/// so a tour holds references to the run's points rather than copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self {
            id: PointId(id),
            x,
            y,
        }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        distance(self, other)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Scatters `count` points uniformly within `bounds`, numbered from zero.
///
/// `count` is bounded by `GaConfig::validate`, so every point gets its own id.
#[instrument(level = "debug", skip(bounds, rng), fields(width = bounds.width, height = bounds.height))]
pub(crate) fn scatter<R: Rng>(count: usize, bounds: &Bounds, rng: &mut R) -> Vec<Arc<Point>> {
    (0..=u32::MAX)
        .take(count)
        .map(|id| {
            Arc::new(Point::new(
                id,
                rng.random_range(0.0..bounds.width),
                rng.random_range(0.0..bounds.height),
            ))
        })
        .collect()
}
