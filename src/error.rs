//! Error types
//!
//! The simulation clamps its own edge cases; only external requests
//! (boon selection, loading settings) can fail.

use thiserror::Error;

/// Rejected simulation requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("No boon choice is pending")]
    NoPendingChoice,

    #[error("Boon choice index {index} out of range (offer has {len} choices)")]
    InvalidChoice { index: usize, len: usize },
}

/// Failures while loading runner settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
