pub mod bootstrap;
pub mod engine;
pub mod models;

pub use engine::{Engine, RunController};
