//! Error type shared by the loaders, the schema and the directions boundary.
//!
//! Most advisory paths never surface these: the estimator, the classifier
//! wrapper and the route scorer all fall back to defaults. Only misconfiguration
//! at construction time and the I/O layer return an `AdvisorError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The classifier schema is empty or otherwise unusable.
    #[error("schema error: {0}")]
    Schema(String),

    /// The classifier failed or returned output outside its contract.
    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// The directions provider response could not be interpreted.
    #[error("provider response error: {0}")]
    ProviderResponse(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
