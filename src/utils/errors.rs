//! Error handling for the Ummah admin core
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for Ummah admin operations
#[derive(Error, Debug)]
pub enum UmmahError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: session invalidated")]
    Unauthorized,

    #[error("Server error: {body}")]
    Server { body: String },

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Submission already in flight")]
    SubmissionInFlight,

    #[error("Request cancelled: view was torn down")]
    Cancelled,

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Result type alias for Ummah admin operations
pub type Result<T> = std::result::Result<T, UmmahError>;

impl UmmahError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            UmmahError::Http(_) => true,
            UmmahError::Unauthorized => false,
            UmmahError::Server { .. } => true,
            UmmahError::Api { .. } => true,
            UmmahError::Serialization(_) => false,
            UmmahError::Io(_) => true,
            UmmahError::UrlParse(_) => false,
            UmmahError::Config(_) => false,
            UmmahError::InvalidInput(_) => false,
            UmmahError::InvalidStateTransition { .. } => false,
            UmmahError::SubmissionInFlight => true,
            UmmahError::Cancelled => true,
            UmmahError::NotFound(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UmmahError::Config(_) => ErrorSeverity::Critical,
            UmmahError::Unauthorized => ErrorSeverity::Warning,
            UmmahError::InvalidInput(_) => ErrorSeverity::Info,
            UmmahError::SubmissionInFlight => ErrorSeverity::Info,
            UmmahError::Cancelled => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
