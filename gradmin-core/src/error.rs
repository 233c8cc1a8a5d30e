use thiserror::Error;

/// Input violations reported by the checked entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescentError {
    #[error("learning rate must lie strictly between 0 and 1, got {0}")]
    LearningRate(f64),

    #[error("initial guess must be finite and nonzero, got {0}")]
    InitialGuess(f64),
}

pub type Result<T> = std::result::Result<T, DescentError>;
