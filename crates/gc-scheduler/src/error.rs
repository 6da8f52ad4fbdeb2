//! Error types for the out-of-band scheduler

/// Scheduler operation result type
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Errors that can occur while scheduling collections
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    /// Invalid configuration
    #[error("invalid scheduler configuration: {0}")]
    InvalidConfig(String),

    /// A collection request issued to the collector failed
    #[error("collection request failed: {0}")]
    CollectionFailed(String),
}

impl SchedulerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a collection failed error
    pub fn collection_failed(msg: impl Into<String>) -> Self {
        Self::CollectionFailed(msg.into())
    }
}
