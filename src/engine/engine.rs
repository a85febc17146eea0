use super::{Error, RunState};
use crate::models::{
    Breeder, ConfigError, GaConfig, Point, Population, ScheduleDecision, scatter,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// The evolution engine.
///
/// The engine owns only its random source. Each run lives in a [`RunState`]
/// that is created by [`Engine::reset`] and advanced one generation at a time by
/// [`Engine::step_generation`]. The engine never schedules itself; a driver
/// decides when the next step happens.
///
/// ```rust
/// use fx_tour_ga::{Engine, models::GaConfig};
///
/// let mut engine = Engine::seeded(42);
/// let config = GaConfig::default().with_city_count(8).with_population_size(16);
///
/// let state = engine.reset(config)?;
/// let state = engine.step_generation(state);
/// assert_eq!(state.generation(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Engine<R = StdRng> {
    rng: R,
}

impl Engine<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Engine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Validates a configuration without starting a run.
    pub fn configure(&self, config: &GaConfig) -> Result<(), ConfigError> {
        config.validate()
    }

    /// Starts a fresh run over `config.city_count` random points within `config.bounds`.
    #[instrument(level = "info", skip(self, config), fields(city_count = config.city_count, population_size = config.population_size))]
    pub fn reset(&mut self, config: GaConfig) -> Result<RunState, Error> {
        self.configure(&config)?;
        let points = scatter(config.city_count, &config.bounds, &mut self.rng);

        self.initialize(config, points)
    }

    /// Starts a fresh run over caller-supplied points.
    #[instrument(level = "info", skip(self, config, points), fields(city_count = config.city_count, population_size = config.population_size))]
    pub fn reset_with_points(
        &mut self,
        config: GaConfig,
        points: Vec<Point>,
    ) -> Result<RunState, Error> {
        self.configure(&config)?;
        if points.len() != config.city_count {
            return Err(Error::PointCountMismatch {
                expected: config.city_count,
                provided: points.len(),
            });
        }

        let mut ids = HashSet::with_capacity(points.len());
        if let Some(duplicate) = points.iter().find(|point| !ids.insert(point.id)) {
            return Err(Error::DuplicatePointId(duplicate.id));
        }

        self.initialize(config, points.into_iter().map(Arc::new).collect())
    }

    fn initialize(&mut self, config: GaConfig, points: Vec<Arc<Point>>) -> Result<RunState, Error> {
        let breeder = Breeder::from_config(&config)?;
        let population = Population::random(&points, config.population_size, &mut self.rng);
        let best_ever = population.fittest().cloned().ok_or(Error::EmptyPopulation)?;

        let run_id = Uuid::now_v7();
        tracing::info!(
            run_id = %run_id,
            best_length = best_ever.length(),
            "Initialized population"
        );

        Ok(RunState {
            run_id,
            started_at: Utc::now(),
            generation: 0,
            running: false,
            points,
            population,
            best_ever,
            config,
            breeder,
        })
    }

    /// Applies one generation. A state already at the generation ceiling is
    /// returned unchanged, apart from being marked as not running.
    pub fn step_generation(&mut self, mut state: RunState) -> RunState {
        self.advance(&mut state);
        state
    }

    /// Runs one full generation in place; returns whether the state advanced.
    #[instrument(level = "info", skip(self, state), fields(run_id = %state.run_id, generation = state.generation))]
    pub(crate) fn advance(&mut self, state: &mut RunState) -> bool {
        let schedule = *state.breeder.schedule();
        let next_generation = match schedule.decide(state.generation) {
            ScheduleDecision::Advance { next_generation } => next_generation,
            ScheduleDecision::Terminate => {
                state.running = false;
                return false;
            }
        };

        let progress = schedule.progress(state.generation);
        let next = self.breed_generation(
            &state.breeder,
            &state.population,
            state.config.population_size,
            progress,
        );
        debug_assert!(
            next.iter()
                .all(|individual| individual.tour().is_permutation_of(&state.points))
        );

        state.population = next;
        state.generation = next_generation;

        if let Some(fittest) = state.population.fittest() {
            if fittest.length() < state.best_ever.length() {
                tracing::info!(
                    generation = state.generation,
                    previous_length = state.best_ever.length(),
                    length = fittest.length(),
                    "Best-ever tour improved"
                );
                state.best_ever = fittest.clone();
            }
        }

        if schedule.decide(state.generation) == ScheduleDecision::Terminate {
            state.running = false;
            tracing::info!(
                generation = state.generation,
                best_length = state.best_ever.length(),
                "Generation ceiling reached"
            );
        }

        true
    }

    /// Elitism plus refill. Offspring only ever read `previous`; the new
    /// population is handed back whole.
    fn breed_generation(
        &mut self,
        breeder: &Breeder,
        previous: &Population,
        size: usize,
        progress: f64,
    ) -> Population {
        let mut next = Vec::with_capacity(size);
        if let Some(elite) = previous.fittest() {
            next.push(elite.clone());
        }

        while next.len() < size {
            match breeder.breed_child(&mut self.rng, previous.individuals(), progress) {
                Some(child) => next.push(child),
                None => break,
            }
        }

        Population::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Decay, Selector};

    fn ring(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let theta = i as f64 / n as f64 * std::f64::consts::TAU;
                Point::new(i as u32, 10.0 * theta.cos(), 10.0 * theta.sin())
            })
            .collect()
    }

    #[test]
    fn it_resets_to_generation_zero() {
        let mut engine = Engine::seeded(1);
        let config = GaConfig::default()
            .with_city_count(12)
            .with_population_size(30);

        let state = engine.reset(config.clone()).unwrap();

        assert_eq!(state.generation(), 0);
        assert!(!state.is_running());
        assert_eq!(state.population().len(), 30);
        assert_eq!(state.points().len(), 12);
        assert_eq!(state.config(), &config);
        for individual in state.population().iter() {
            assert_eq!(individual.tour().len(), 12);
            assert!(individual.tour().is_permutation_of(state.points()));
        }
        assert_eq!(
            state.best_ever().length(),
            state.population().fittest().unwrap().length()
        );
    }

    #[test]
    fn it_rejects_invalid_configs_on_reset() {
        let mut engine = Engine::seeded(1);

        let result = engine.reset(GaConfig::default().with_city_count(1));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::TooFewCities(1)))
        ));
        assert!(engine.configure(&GaConfig::default().with_mutation_rate(-1.0)).is_err());
    }

    #[test]
    fn it_validates_supplied_points() {
        let mut engine = Engine::seeded(1);
        let config = GaConfig::default().with_city_count(5);

        let result = engine.reset_with_points(config.clone(), ring(4));
        assert!(matches!(
            result,
            Err(Error::PointCountMismatch {
                expected: 5,
                provided: 4
            })
        ));

        let mut points = ring(5);
        points[3].id = points[1].id;
        let result = engine.reset_with_points(config, points);
        assert!(matches!(result, Err(Error::DuplicatePointId(id)) if id.0 == 1));
    }

    #[test]
    fn it_keeps_the_elite_and_population_size() {
        let mut engine = Engine::seeded(2);
        let config = GaConfig::default()
            .with_city_count(10)
            .with_population_size(25);
        let mut state = engine.reset_with_points(config, ring(10)).unwrap();

        for _ in 0..20 {
            let elite = state.population().fittest().unwrap().clone();
            state = engine.step_generation(state);

            assert_eq!(state.population().len(), 25);
            assert_eq!(&state.population().individuals()[0], &elite);
            assert!(state.population().fittest().unwrap().length() <= elite.length());
        }
    }

    #[test]
    fn it_never_lengthens_the_best_ever() {
        let mut engine = Engine::seeded(3);
        let config = GaConfig::default()
            .with_city_count(15)
            .with_population_size(20)
            .with_selector(Selector::Tournament { size: 2 });
        let mut state = engine.reset(config).unwrap();

        let mut previous = state.best_ever().length();
        for _ in 0..100 {
            state = engine.step_generation(state);
            assert!(state.best_ever().length() <= previous);
            assert!(state.best_ever().tour().is_permutation_of(state.points()));
            previous = state.best_ever().length();
        }
    }

    #[test]
    fn it_stops_at_the_generation_ceiling() {
        let mut engine = Engine::seeded(4);
        let config = GaConfig::default()
            .with_city_count(6)
            .with_population_size(8)
            .with_max_generations(3);
        let mut state = engine.reset(config).unwrap();
        state.running = true;

        for expected in 1..=3 {
            state = engine.step_generation(state);
            assert_eq!(state.generation(), expected);
        }
        assert!(state.is_exhausted());
        assert!(!state.is_running());

        let population = state.population().clone();
        let state = engine.step_generation(state);
        assert_eq!(state.generation(), 3);
        assert_eq!(state.population(), &population);
    }

    #[test]
    fn it_survives_coincident_points() {
        let mut engine = Engine::seeded(5);
        let config = GaConfig::default()
            .with_city_count(4)
            .with_population_size(6);
        let points = (0..4).map(|i| Point::new(i, 1.0, 1.0)).collect();

        let mut state = engine.reset_with_points(config, points).unwrap();
        for _ in 0..10 {
            state = engine.step_generation(state);
        }

        assert_eq!(state.best_ever().length(), 0.0);
        assert_eq!(state.population().len(), 6);
    }

    #[test]
    fn it_steps_through_a_decay_that_collapses_the_mutation_rate() {
        let mut engine = Engine::seeded(1);
        let config = GaConfig::default()
            .with_city_count(8)
            .with_population_size(10)
            .with_max_generations(8)
            .with_mutation_rate(0.0)
            .with_mutation_decay(Decay::Exponential {
                multiplier: 2.0,
                exponent: -1,
            });
        engine.configure(&config).unwrap();

        let mut state = engine.reset(config).unwrap();
        while !state.is_exhausted() {
            state = engine.step_generation(state);
            assert!(state.best_ever().tour().is_permutation_of(state.points()));
        }

        assert_eq!(state.generation(), 8);
    }

    #[test]
    fn it_is_deterministic_for_a_seed() {
        let config = GaConfig::default()
            .with_city_count(9)
            .with_population_size(12);

        let run = |seed| {
            let mut engine = Engine::seeded(seed);
            let mut state = engine.reset(config.clone()).unwrap();
            for _ in 0..15 {
                state = engine.step_generation(state);
            }
            state.best_ever().tour().ids()
        };

        assert_eq!(run(77), run(77));
    }
}
