//! Error types for IAM client operations.
//!
//! Two error families exist at this layer: local validation failures raised
//! before any request is dispatched, and transport/remote failures propagated
//! verbatim from the transport collaborator. Nothing is retried or translated
//! beyond these types.

/// Main error type for IAM client operations.
///
/// Covers local validation failures, transport-level failures, and remote
/// HTTP errors. Remote failures carry the raw status and body so callers can
/// apply their own error conventions.
#[derive(Debug, thiserror::Error)]
pub enum IamError {
    /// A required input was absent or empty, detected before dispatch
    #[error("Missing required value: {field}")]
    MissingValue { field: String },

    /// Network-level failure reported by the transport (connect, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Remote service answered with a non-2xx status
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request URL was rejected by the transport
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// A create-style response carried no usable Location header
    #[error("Response has no Location header to extract an identifier from")]
    MissingLocation,
}

/// Errors that can occur while building an [`IamClient`](crate::IamClient).
///
/// These are programming errors and should be caught during development
/// rather than at runtime.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    /// Base URL was not configured
    #[error("Base URL is required but not provided")]
    MissingBaseUrl,

    /// Neither a transport nor a token provider was configured
    #[error("A transport or token provider is required but not provided")]
    MissingTransport,
}

// Convenience methods for creating common errors
impl IamError {
    /// Create a missing-value error for a named field
    pub fn missing_value(field: impl Into<String>) -> Self {
        Self::MissingValue {
            field: field.into(),
        }
    }

    /// Create a transport error from any displayable failure
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an HTTP error from a status code and response body
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid-URL error
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// True when the error was raised locally, before any dispatch
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }
}

// Result type aliases for convenience
pub type IamResult<T> = Result<T, IamError>;
pub type BuildResult<T> = Result<T, ClientBuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_display() {
        let error = IamError::missing_value("identity");
        assert!(error.to_string().contains("identity"));
        assert!(error.is_local());
    }

    #[test]
    fn test_http_error_display() {
        let error = IamError::http(404, "user not found");
        assert!(error.to_string().contains("404"));
        assert!(error.to_string().contains("user not found"));
        assert!(!error.is_local());
    }

    #[test]
    fn test_build_error_display() {
        let error = ClientBuildError::MissingBaseUrl;
        assert!(error.to_string().contains("Base URL"));
    }
}
