//! Error types for nova

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, NovaError>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum NovaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    #[error("approval required: {0}")]
    ApprovalRequired(String),

    /// Transport-level failure talking to the answer service (connect,
    /// timeout, or an unreadable response body).
    #[error("answer service unreachable: {0}")]
    RemoteUnavailable(String),

    /// The answer service responded with a non-success HTTP status.
    #[error("answer service returned HTTP {0}")]
    RemoteStatus(u16),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl NovaError {
    /// Stable machine-readable code for robot-mode error envelopes.
    pub fn robot_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::InvalidQuestion(_) => "invalid_question",
            Self::ApprovalRequired(_) => "approval_required",
            Self::RemoteUnavailable(_) => "remote_unavailable",
            Self::RemoteStatus(_) => "remote_status",
            Self::Storage(_) => "storage",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }
}
