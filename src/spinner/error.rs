use thiserror::Error;

/// Errors that can occur while loading, validating or running a spinner
/// simulation.
#[derive(Debug, Error)]
pub enum SpinnerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse spinner config from {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse spinner config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Probabilities add up to {sum}, but should add up to denominator {denominator}")]
    ProbabilitySum { sum: f64, denominator: f64 },

    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[error("Worker thread {0} panicked")]
    WorkerPanicked(usize),
}

/// Raised when a random draw doesn't land in any payout interval.
///
/// This is not fatal. The tournament that hit it counts as a zero multiplier.
#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum PayoutSelectionError {
    #[error("No suitable payout found for draw {draw:.10}")]
    NoMatch { draw: f64 },
}

/// Result type for spinner operations
pub type Result<T> = std::result::Result<T, SpinnerError>;
