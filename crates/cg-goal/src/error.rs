// error.rs — Error types for the goal list subsystem.

use thiserror::Error;

/// Errors that can occur while managing the goal list.
#[derive(Debug, Error)]
pub enum GoalError {
    /// Submitted input was empty. The only error a screen command can raise.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::ScreenConfig`].
    #[error("invalid config at {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },

    /// Failed to serialize an event payload.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A notification sink failed (non-fatal).
    #[error("notification error: {0}")]
    NotificationError(String),
}

impl GoalError {
    /// True for the recoverable input-validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, GoalError::Validation { .. })
    }
}
