mod bounds;
mod breeder;
mod config;
mod crossover;
mod fitness;
mod individual;
mod mutagen;
mod point;
mod population;
mod schedule;
mod selector;
mod tour;

pub use bounds::{Bounds, BoundsError};
pub use config::{ConfigError, GaConfig};
pub use crossover::{Crossover, ProbabilityOutOfRangeError};
pub use fitness::{DEGENERATE_FITNESS, fitness};
pub use individual::Individual;
pub use mutagen::{Decay, MutationRate, MutationRateOutOfRange, Mutagen};
pub use point::{Point, PointId, distance};
pub use population::{Population, PopulationStats};
pub use schedule::{Schedule, ScheduleDecision};
pub use selector::{SelectionError, Selector};
pub use tour::Tour;

pub(crate) use breeder::Breeder;
pub(crate) use point::scatter;
