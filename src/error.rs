// src/error.rs
use std::path::PathBuf;

/// Everything that can stop a scrape run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("flight table not found")]
    TableNotFound,

    #[error("flight table not found on {url}")]
    MalformedPage { url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}:{line}: {reason}", .path.display())]
    Csv { path: PathBuf, line: usize, reason: String },

    #[error("chart window failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
