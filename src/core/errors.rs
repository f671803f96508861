use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The exchange answered with `success: false`.
    #[error("API error on {endpoint}: {status} - {message}")]
    ApiError {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl ExchangeError {
    /// Server-provided message for `success: false` responses
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::ApiError { message, .. } => Some(message),
            _ => None,
        }
    }
}
