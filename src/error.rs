//! Error types for cleanco.
//!
//! Cleaning itself never fails; these cover configuration and batch I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Term {0:?} is empty once punctuation and accents are removed")]
    InvalidTerm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
