/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport level failure reported by reqwest
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Body could not be encoded or decoded as JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Database failure while verifying emplacements
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// The server answered with a status code the operation does not document
    #[error("unexpected status code: {status}")]
    UnexpectedStatus {
        /// Status code returned by the server
        status: StatusCode,
        /// Raw response body
        content: Vec<u8>,
    },
    /// Caller supplied an unusable value
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Configuration could not be turned into a working client
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the status code carried by an [`AppError::UnexpectedStatus`]
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::UnexpectedStatus { status, .. } => Some(*status),
            AppError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the response body of an [`AppError::UnexpectedStatus`] as text
    #[must_use]
    pub fn content_text(&self) -> Option<String> {
        match self {
            AppError::UnexpectedStatus { content, .. } => {
                Some(String::from_utf8_lossy(content).into_owned())
            }
            _ => None,
        }
    }
}

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;
