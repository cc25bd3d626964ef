//! Error types and exit codes

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error (config, I/O)
/// - 3: Transport error or interrupted
/// - 4: Validation error
/// - 5: Malformed API response
pub type DiscoResult<T> = Result<T, DiscoError>;

#[derive(Debug, Error)]
pub enum DiscoError {
    /// Every invalid input found before any network call.
    #[error("invalid input:\n{}", .0.iter().map(|p| format!("  - {p}")).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),

    #[error("GitHub API request failed: {0}")]
    Transport(String),

    #[error("malformed GitHub API response: {reason}\n{body}")]
    MalformedResponse { reason: String, body: String },

    #[error("interrupted")]
    Cancelled,

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiscoError {
    pub fn malformed(reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            body: body.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 4,
            Self::Transport(_) | Self::Cancelled => 3,
            Self::MalformedResponse { .. } => 5,
            Self::Config(_) | Self::Io(_) => 1,
        }
    }
}

impl From<reqwest::Error> for DiscoError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
