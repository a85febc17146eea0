use super::{
    Bounds, BoundsError, Crossover, Decay, MutationRate, MutationRateOutOfRange,
    ProbabilityOutOfRangeError, SelectionError, Selector,
};
use serde::{Deserialize, Serialize};

/// Rejections raised before a run is allowed to start.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ConfigError {
    #[error("TooFewCities: city_count must be at least 2, got {0}")]
    TooFewCities(usize),
    #[error("TooManyCities: city_count must be at most 4294967295, got {0}")]
    TooManyCities(usize),
    #[error("EmptyPopulation: population_size must be at least 1, got {0}")]
    EmptyPopulation(usize),
    #[error("NoGenerations: max_generations must be at least 1, got {0}")]
    NoGenerations(u32),
    #[error("Mutation rate error: {0}")]
    MutationRate(#[from] MutationRateOutOfRange),
    #[error("Crossover rate error: {0}")]
    CrossoverRate(#[from] ProbabilityOutOfRangeError),
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),
}

/// Parameters of one run, supplied by the driver.
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes:
///
/// ```rust
/// use fx_tour_ga::models::GaConfig;
///
/// let config: GaConfig = serde_json::from_str(r#"{ "city_count": 30 }"#)?;
/// assert_eq!(config.city_count, 30);
/// assert_eq!(config.population_size, GaConfig::default().population_size);
/// config.validate()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    pub city_count: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub max_generations: u32,
    /// Extent random points are drawn from on reset.
    pub bounds: Bounds,
    pub selector: Selector,
    pub mutation_decay: Decay,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            city_count: 20,
            population_size: 100,
            mutation_rate: 0.05,
            crossover_rate: 0.8,
            max_generations: 1000,
            bounds: Bounds::default(),
            selector: Selector::default(),
            mutation_decay: Decay::default(),
        }
    }
}

impl GaConfig {
    pub fn with_city_count(mut self, city_count: usize) -> Self {
        self.city_count = city_count;
        self
    }

    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    pub fn with_crossover_rate(mut self, crossover_rate: f64) -> Self {
        self.crossover_rate = crossover_rate;
        self
    }

    pub fn with_max_generations(mut self, max_generations: u32) -> Self {
        self.max_generations = max_generations;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_mutation_decay(mut self, mutation_decay: Decay) -> Self {
        self.mutation_decay = mutation_decay;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.city_count < 2 {
            return Err(ConfigError::TooFewCities(self.city_count));
        }
        if u32::try_from(self.city_count).is_err() {
            return Err(ConfigError::TooManyCities(self.city_count));
        }
        if self.population_size < 1 {
            return Err(ConfigError::EmptyPopulation(self.population_size));
        }
        if self.max_generations < 1 {
            return Err(ConfigError::NoGenerations(self.max_generations));
        }

        MutationRate::new(self.mutation_rate, self.mutation_decay.clone())?;
        Crossover::order(self.crossover_rate)?;
        self.bounds.validate()?;
        self.selector.validate()?;

        Ok(())
    }
}
