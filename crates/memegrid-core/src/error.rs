use thiserror::Error;

/// Failure to obtain the response body from the meme endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("request to meme endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("meme endpoint answered with status {0}")]
    Status(reqwest::StatusCode),
}

/// The response body did not match the meme list schema.
#[derive(Debug, Error)]
#[error("meme list does not match schema at line {line}, column {column}: {message}")]
pub struct DecodeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// A load that produced no list. The presenter treats every variant the same way.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The load task went away without reporting, e.g. it panicked.
    #[error("meme load ended without a result")]
    Interrupted,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
}
