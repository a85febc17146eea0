use super::{
    ConfigError, Crossover, GaConfig, Individual, MutationRate, Mutagen, Schedule, Selector,
};
use rand::Rng;

/// The validated operators of a run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Breeder {
    selector: Selector,
    crossover: Crossover,
    mutagen: Mutagen,
    schedule: Schedule,
}

impl Breeder {
    pub(crate) fn from_config(config: &GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            selector: config.selector,
            crossover: Crossover::order(config.crossover_rate)?,
            mutagen: Mutagen::new(MutationRate::new(
                config.mutation_rate,
                config.mutation_decay.clone(),
            )?),
            schedule: Schedule::generational(config.max_generations),
        })
    }

    pub(crate) fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Selects two parents independently from `parents`, recombines them in
    /// that order and mutates the child. `None` only when `parents` is empty.
    pub(crate) fn breed_child<R: Rng>(
        &self,
        rng: &mut R,
        parents: &[Individual],
        progress: f64,
    ) -> Option<Individual> {
        let parent1 = self.selector.select(rng, parents)?;
        let parent2 = self.selector.select(rng, parents)?;

        let tour = self.crossover.apply(rng, parent1.tour(), parent2.tour());
        let tour = self.mutagen.mutate(rng, tour, progress);
        debug_assert_eq!(tour.len(), parent1.tour().len());

        Some(Individual::new(tour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Population;
    use crate::models::tour::test_utilities::shared;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn it_rejects_invalid_configs() {
        let config = GaConfig::default().with_crossover_rate(2.0);

        assert!(matches!(
            Breeder::from_config(&config),
            Err(ConfigError::CrossoverRate(_))
        ));
    }

    #[test]
    fn it_breeds_valid_children() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = shared(&[
            (0.0, 0.0),
            (3.0, 1.0),
            (6.0, 0.5),
            (8.0, 4.0),
            (5.0, 7.0),
            (1.0, 6.0),
            (2.0, 3.0),
        ]);
        let population = Population::random(&points, 10, &mut rng);
        let breeder = Breeder::from_config(
            &GaConfig::default()
                .with_city_count(points.len())
                .with_mutation_rate(1.0)
                .with_crossover_rate(1.0),
        )
        .unwrap();

        for _ in 0..100 {
            let child = breeder
                .breed_child(&mut rng, population.individuals(), 0.0)
                .unwrap();
            assert!(child.tour().is_permutation_of(&points));
            assert_eq!(child.length(), child.tour().length());
        }
    }

    #[test]
    fn it_cannot_breed_without_parents() {
        let mut rng = StdRng::seed_from_u64(0);
        let breeder = Breeder::from_config(&GaConfig::default()).unwrap();

        assert!(breeder.breed_child(&mut rng, &[], 0.0).is_none());
    }
}
