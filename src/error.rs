//! Error types
//!
//! The simulation step itself cannot fail; only configuration can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Court or paddle geometry that cannot host a match
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Settings document could not be parsed
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
