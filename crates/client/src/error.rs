//! Error types for the infra admin client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during infra admin client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP response from the GraphQL endpoint.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The GraphQL response carried an `errors` array.
    #[error("GraphQL operation {operation} failed: {}", .messages.join("; "))]
    GraphQl {
        operation: &'static str,
        messages: Vec<String>,
    },

    /// Invalid response format from the server.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Local validation rejected the working configuration.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A field name that the section does not declare.
    #[error("Unknown field '{field}' for section '{section}'")]
    UnknownField { section: String, field: String },

    /// An operation needed loaded configuration but none was loaded.
    #[error("Configuration has not been loaded")]
    NotLoaded,
}

impl ClientError {
    /// Check if this error indicates authentication failure.
    ///
    /// The server reports rejected tokens either as HTTP 401/403 or as GraphQL
    /// errors whose message starts with `auth/`.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) => true,
            Self::ApiError { status, .. } => matches!(status, 401 | 403),
            Self::GraphQl { messages, .. } => messages
                .iter()
                .any(|m| m.starts_with("auth/") || m.contains(": auth/")),
            _ => false,
        }
    }
}
