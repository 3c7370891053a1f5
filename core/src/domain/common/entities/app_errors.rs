use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
