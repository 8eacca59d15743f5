//! Error types for memlink operations.
//!
//! Every failure carries a stable [`ErrorCode`] so the tool layer can attach
//! it to protocol errors without matching on message text.

use thiserror::Error;

/// Result type alias for memlink operations.
pub type MemlinkResult<T> = Result<T, MemlinkError>;

/// Main error type for all memlink operations.
#[derive(Error, Debug)]
pub enum MemlinkError {
    /// The memory service answered with a non-success status.
    #[error("mem0 API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response (refused, reset, timed out).
    #[error("Network error: {message}")]
    Network {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A success response whose body is not valid JSON.
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input the memory service cannot address.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (VAL_xxx)
    ValInvalidInput,

    // Remote API (API_xxx)
    ApiClientError,
    ApiServerError,

    // Network (NET_xxx)
    NetTimeout,
    NetConnectionFailed,

    // Parse (PARSE_xxx)
    ParseInvalidJson,

    // Configuration (CFG_xxx)
    CfgInvalid,

    // Serialization (SER_xxx)
    SerFailed,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::ApiClientError => "API_001",
            ErrorCode::ApiServerError => "API_002",
            ErrorCode::NetTimeout => "NET_001",
            ErrorCode::NetConnectionFailed => "NET_002",
            ErrorCode::ParseInvalidJson => "PARSE_001",
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::SerFailed => "SER_001",
        }
    }
}

impl MemlinkError {
    /// Create an API error from a non-success status and its raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a network error without an underlying source.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            code: ErrorCode::NetConnectionFailed,
            source: None,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Api { status, .. } if *status >= 500 => ErrorCode::ApiServerError,
            Self::Api { .. } => ErrorCode::ApiClientError,
            Self::Network { code, .. } => *code,
            Self::Parse { .. } => ErrorCode::ParseInvalidJson,
            Self::Validation(_) => ErrorCode::ValInvalidInput,
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            Self::Serialization(_) => ErrorCode::SerFailed,
        }
    }

    /// HTTP status of the remote response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body text of the remote error response, if there was one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MemlinkError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            ErrorCode::NetTimeout
        } else {
            ErrorCode::NetConnectionFailed
        };
        Self::Network {
            message: err.to_string(),
            code,
            source: Some(Box::new(err)),
        }
    }
}
