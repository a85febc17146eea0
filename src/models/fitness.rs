/// Fitness given to tours with zero length, which only happens when every
/// point coincides. Also caps the fitness of vanishingly short tours so the
/// roulette total stays finite.
pub const DEGENERATE_FITNESS: f64 = 1e12;

/// Inverse tour length. Higher is better.
pub fn fitness(length: f64) -> f64 {
    if length > 0.0 {
        (1.0 / length).min(DEGENERATE_FITNESS)
    } else {
        DEGENERATE_FITNESS
    }
}
