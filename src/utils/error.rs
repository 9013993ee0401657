use thiserror::Error;

#[derive(Error, Debug)]
pub enum TdmError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Non-2xx response. The user-facing message is fixed per endpoint; the
    /// status is kept for logs and never shown to the end user.
    #[error("{message}")]
    Fetch {
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TdmError>;
