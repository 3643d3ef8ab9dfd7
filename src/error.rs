use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Browser error: {0}")]
    Browser(#[from] anyhow::Error),
    #[error("Invalid browser launch options: {0}")]
    Launch(String),
    #[error("Results feed did not appear within {0:?}")]
    FeedNotFound(Duration),
    #[error("Unexpected script result: {0}")]
    Script(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
