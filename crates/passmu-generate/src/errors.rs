use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("base input is empty")]
    EmptyInput,
    #[error(transparent)]
    InvalidConfig(#[from] passmu_core::Error),
    #[error("scheduler error: {0}")]
    Scheduler(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
