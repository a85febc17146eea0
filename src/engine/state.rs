use crate::models::{Breeder, GaConfig, Individual, Point, Population};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Everything one run owns between generation steps.
///
/// Only [`Engine`](super::Engine) changes a `RunState`; drivers read it, or
/// take a [`Snapshot`], between steps.
#[derive(Debug, Clone)]
pub struct RunState {
    pub(crate) run_id: Uuid,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) generation: u32,
    pub(crate) running: bool,
    pub(crate) points: Vec<Arc<Point>>,
    pub(crate) population: Population,
    pub(crate) best_ever: Individual,
    pub(crate) config: GaConfig,
    pub(crate) breeder: Breeder,
}

impl RunState {
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the generation ceiling is reached.
    pub fn is_exhausted(&self) -> bool {
        self.generation >= self.config.max_generations
    }

    pub fn points(&self) -> &[Arc<Point>] {
        &self.points
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn best_ever(&self) -> &Individual {
        &self.best_ever
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Read-only projection for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let stats = self.population.stats().unwrap_or_default();

        Snapshot {
            run_id: self.run_id,
            generation: self.generation,
            running: self.running,
            current_population_best_length: stats.best_length,
            current_population_mean_length: stats.mean_length,
            current_population_worst_length: stats.worst_length,
            best_ever_tour: self.best_ever.tour().to_points(),
            best_ever_length: self.best_ever.length(),
        }
    }
}

/// An owned view of a run, detached from the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub run_id: Uuid,
    pub generation: u32,
    pub running: bool,
    pub current_population_best_length: f64,
    pub current_population_mean_length: f64,
    pub current_population_worst_length: f64,
    pub best_ever_tour: Vec<Point>,
    pub best_ever_length: f64,
}
