mod controller;
mod engine;
mod errors;
mod state;

pub use controller::{RunController, TickOutcome};
pub use engine::Engine;
pub use errors::Error;
pub use state::{RunState, Snapshot};
