//! # Common Error Types
//!
//! Consolidated error handling for the widget.
//!
//! Errors are categorized by their source:
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **State**: Application state management errors
//! - **Validation**: Input validation errors
//!
//! Error strings cross the event channel as plain `String`s (events must be
//! `Clone`); convert with `to_string()` at the task boundary.

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the widget.
///
/// Each variant includes a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Used for errors during HTTP requests to the chatbot backend:
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - HTTP errors (4xx client errors, 5xx server errors)
    /// - JSON parsing errors (malformed responses)
    #[error("API error: {0}")]
    Api(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// Note: This type is exported for public API use. It may appear unused
/// in internal code but is part of the public interface.
#[allow(dead_code)] // Exported for public API and future use
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}
