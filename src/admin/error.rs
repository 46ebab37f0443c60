use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Failed to write to the key-value store: {0}")]
    Storage(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
