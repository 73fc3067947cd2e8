//! Crate-level error type

use crate::comparison::ComparisonError;
use crate::params::ParameterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    #[error("comparison failed: {0}")]
    Comparison(#[from] ComparisonError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
