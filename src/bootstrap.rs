use crate::engine::{Engine, RunController};
use crate::models::GaConfig;
use anyhow::Context;
use rand::rngs::StdRng;
use std::time::Duration;

pub const CONFIG_PATH_VAR: &str = "TOUR_GA_CONFIG";
pub const SEED_VAR: &str = "TOUR_GA_SEED";
pub const TICK_MS_VAR: &str = "TOUR_GA_TICK_MS";

const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Driver settings around a run.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub ga: GaConfig,
    /// Fixed seed for reproducible runs; entropy otherwise.
    pub seed: Option<u64>,
    /// Interval between generation steps.
    pub tick: Duration,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            ga: GaConfig::default(),
            seed: None,
            tick: DEFAULT_TICK,
        }
    }
}

impl Configuration {
    /// Reads `TOUR_GA_CONFIG` (path to a JSON `GaConfig`), `TOUR_GA_SEED` and
    /// `TOUR_GA_TICK_MS` from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let ga = match lookup(CONFIG_PATH_VAR) {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {path}"))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {path}"))?
            }
            None => GaConfig::default(),
        };

        let seed = lookup(SEED_VAR)
            .map(|value| value.parse::<u64>())
            .transpose()
            .with_context(|| format!("{SEED_VAR} must be an unsigned integer"))?;

        let tick = lookup(TICK_MS_VAR)
            .map(|value| value.parse::<u64>().map(Duration::from_millis))
            .transpose()
            .with_context(|| format!("{TICK_MS_VAR} must be a number of milliseconds"))?
            .unwrap_or(DEFAULT_TICK);
        if tick.is_zero() {
            anyhow::bail!("{TICK_MS_VAR} must be at least 1 millisecond");
        }

        Ok(Self { ga, seed, tick })
    }
}

/// Builds a controller with a fresh run, ready to be started.
pub fn bootstrap(config: Configuration) -> anyhow::Result<RunController<StdRng>> {
    let engine = match config.seed {
        Some(seed) => Engine::seeded(seed),
        None => Engine::from_entropy(),
    };

    let controller = RunController::new(engine, config.ga).context("failed to start run")?;
    tracing::info!(
        run_id = %controller.state().run_id(),
        seed = ?config.seed,
        tick_ms = config.tick.as_millis() as u64,
        "Run bootstrapped"
    );

    Ok(controller)
}
