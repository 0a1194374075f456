use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    /// Terminal failure of a sequence. The reason is an opaque payload:
    /// operators forward it downstream as-is and never inspect it.
    #[error("stream failed: {0}")]
    Failed(Arc<anyhow::Error>),

    #[error("transform error: {0}")]
    Transform(String),

    #[error("sink error: {0}")]
    Sink(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl StreamError {
    pub fn failed(reason: impl Into<anyhow::Error>) -> Self {
        StreamError::Failed(Arc::new(reason.into()))
    }
}

impl From<anyhow::Error> for StreamError {
    fn from(reason: anyhow::Error) -> Self {
        StreamError::failed(reason)
    }
}

pub type Result<T> = std::result::Result<T, StreamError>;
