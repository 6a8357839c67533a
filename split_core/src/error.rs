//! Error types for the split_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for split_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Planner input rejected before scheduling
    #[error("Invalid planner input: {0}")]
    Validation(#[from] ValidationError),
}

/// Precondition failures for a `SplitPlannerInput`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("training frequency must be between 1 and 7, got {0}")]
    FrequencyOutOfRange(u8),

    #[error("session duration must be positive")]
    NonPositiveSessionDuration,

    #[error("activity '{name}' has day index {day}, expected 0..=6")]
    ActivityDayOutOfRange { name: String, day: u8 },

    #[error("available gym day index {0} is outside 0..=6")]
    AvailableDayOutOfRange(u8),

    #[error("fixed schedule needs at least one available gym day")]
    NoAvailableGymDays,
}
