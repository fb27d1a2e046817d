//! Error types for profile validation and scoring

use thiserror::Error;

/// Failure raised before any scoring happens
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{field} must be within {min}-{max}, got {value}")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("brewingTemp must be a finite number, got {0}")]
    NonFiniteTemperature(f64),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to parse tea profile JSON")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
