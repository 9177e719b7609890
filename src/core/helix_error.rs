use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HelixError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("curve lengths must match and be non-zero (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("cycle detected while resolving scene {0:?}")]
    CycleDetected(String),
    #[error("scene import failed: {0}")]
    ImportFailed(String),
    #[error("scene {0:?} did not produce a coupling point")]
    MissingCoupling(String),
    #[error("{0}")]
    Other(String),
}

impl From<&str> for HelixError {
    fn from(error: &str) -> Self {
        HelixError::Other(error.to_string())
    }
}

pub type HelixResult<T> = Result<T, HelixError>;
