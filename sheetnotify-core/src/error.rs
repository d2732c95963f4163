//! Error types shared by the notifier pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Malformed A1 notation, a zero row/column, or a range past `u32::MAX`
    #[error("invalid range '{0}'")]
    InvalidRange(String),

    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("failed to serialize update payload: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Connection, timeout or client construction failure
    #[error("failed to deliver update payload: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
