//! Config-level errors. Tracker navigation has no error values of its own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_snapshots must be at least 1")]
    ZeroCapacity,

    #[error("invalid tracker config json: {0}")]
    Parse(#[from] serde_json::Error),
}
