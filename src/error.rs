// Error types for umu-search.
// Tags transport, parse, and validation failures so each maps to its own exit code.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("database fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("database fetch failed: HTTP {status} from {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed database: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed database: no column named {0:?}")]
    MissingField(String),

    #[error("Invalid field for --print: {input}. Valid fields are: {valid}")]
    InvalidPrintField { input: String, valid: String },

    #[error("cache error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            SearchError::Io(_) => 1,
            SearchError::InvalidPrintField { .. } => 2,
            SearchError::Fetch(_) | SearchError::HttpStatus { .. } => 3,
            SearchError::Csv(_) | SearchError::MissingField(_) => 4,
        }
    }
}
