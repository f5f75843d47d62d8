// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

use crate::model::ActivityId;

#[derive(Error, Debug)]
pub enum ConstruplanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Activity not found: {0}")]
    NotFound(ActivityId),

    #[error("Cycle detected: activity {activity} cannot depend on activity {predecessor}")]
    CycleDetected {
        activity: ActivityId,
        predecessor: ActivityId,
    },

    #[error("Invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("Invalid duration {value} (expected a positive number of days)")]
    InvalidDuration { value: i64 },

    #[error("Date out of range while scheduling activity {0}")]
    DateOutOfRange(ActivityId),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Activity store is no longer running")]
    StoreClosed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ConstruplanError>;
