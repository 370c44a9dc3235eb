use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid query: {0}")]
    Query(String),

    #[error("No source data could be retrieved for '{0}'")]
    Fetch(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Process exit code for this error, so callers can tell a fetch
    /// problem from an extraction problem from the outside.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Query(_) => 2,
            Error::Fetch(_) => 3,
            Error::Extraction(_) => 4,
            _ => 1,
        }
    }

    /// Transient transport failures are worth a single retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
