//! Failure classes for one invocation. Every variant is terminal: the binary
//! prints it to stderr and exits non-zero.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TpspError {
    #[error("failed to fetch data: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API returned unsuccessful status")]
    Unsuccessful,

    #[error("invalid service '{0}' (valid services: metro, cptm, viamobilidade, viaquatro)")]
    InvalidService(String),

    #[error("no lines found")]
    NoLines,
}

pub type Result<T> = std::result::Result<T, TpspError>;
