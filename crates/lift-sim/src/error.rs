use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("floor count must be at least 2, got {0}")]
    FloorCount(i32),

    #[error("at least one elevator car is required")]
    NoElevators,

    #[error("car capacity must be at least 1")]
    ZeroCapacity,
}

pub type SimResult<T> = Result<T, SimError>;
