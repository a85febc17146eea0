use crate::models::{ConfigError, PointId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("PointCountMismatch: expected={expected}, provided={provided}")]
    PointCountMismatch { expected: usize, provided: usize },
    #[error("DuplicatePointId: id={0}")]
    DuplicatePointId(PointId),
    #[error("EmptyPopulation")]
    EmptyPopulation,
}
