/// Result alias that carries the custom [`SummaryError`] type.
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// The dataset contained no periods, so no maximum is defined.
    #[error("dataset contains no periods")]
    EmptyDataset,
    /// The configuration cannot drive a summary build.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummaryError {
    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
