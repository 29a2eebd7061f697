use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP Error: {status}")]
    Status { status: u16 },

    #[error("Failed to decode summary response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
