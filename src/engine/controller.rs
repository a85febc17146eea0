use super::{Engine, Error, RunState, Snapshot};
use crate::models::{GaConfig, Point};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::instrument;

/// What a driver tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// One generation was applied.
    Advanced(Snapshot),
    /// The run is paused; nothing changed.
    Paused,
    /// The generation ceiling is reached; the driver should stop ticking.
    Exhausted(Snapshot),
}

/// External-facing control of a single run: play/pause, ticking, reset.
///
/// A driver owns the clock and calls [`RunController::tick`] on its cadence.
/// Every tick either applies one full generation or nothing at all, so pausing
/// between two ticks never leaves a half-built population behind.
pub struct RunController<R = StdRng> {
    engine: Engine<R>,
    state: RunState,
}

impl<R: Rng> RunController<R> {
    pub fn new(mut engine: Engine<R>, config: GaConfig) -> Result<Self, Error> {
        let state = engine.reset(config)?;

        Ok(Self { engine, state })
    }

    pub fn with_points(
        mut engine: Engine<R>,
        config: GaConfig,
        points: Vec<Point>,
    ) -> Result<Self, Error> {
        let state = engine.reset_with_points(config, points)?;

        Ok(Self { engine, state })
    }

    /// Resumes automatic advancement. Returns `false` when the run is exhausted.
    pub fn start(&mut self) -> bool {
        if self.state.is_exhausted() {
            tracing::debug!(run_id = %self.state.run_id, "Run is exhausted; not starting");
            return false;
        }

        self.state.running = true;
        true
    }

    pub fn pause(&mut self) {
        self.state.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    pub fn generation(&self) -> u32 {
        self.state.generation
    }

    /// Advances one generation if the run is running and not exhausted.
    #[instrument(level = "debug", skip(self), fields(run_id = %self.state.run_id, generation = self.state.generation))]
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.is_exhausted() {
            self.state.running = false;
            return TickOutcome::Exhausted(self.state.snapshot());
        }
        if !self.state.running {
            return TickOutcome::Paused;
        }

        self.engine.advance(&mut self.state);

        if self.state.is_exhausted() {
            TickOutcome::Exhausted(self.state.snapshot())
        } else {
            TickOutcome::Advanced(self.state.snapshot())
        }
    }

    /// Applies one generation regardless of the running flag.
    pub fn step(&mut self) -> Snapshot {
        self.engine.advance(&mut self.state);
        self.state.snapshot()
    }

    /// Discards the current run and starts a new one with `config`. On error the
    /// current run is kept.
    pub fn reset(&mut self, config: GaConfig) -> Result<(), Error> {
        self.state = self.engine.reset(config)?;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }
}
