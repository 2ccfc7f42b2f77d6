use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Unknown cancellation action: {0}")]
    UnknownAction(String),

    #[error("Tracing initialization failed: {0}")]
    Tracing(String),
}

impl From<config::ConfigError> for ViewError {
    fn from(err: config::ConfigError) -> Self {
        ViewError::ConfigError(anyhow::Error::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
