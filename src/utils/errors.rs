//! Error handling for CourtDesk
//!
//! This module defines the main error types used throughout the library
//! and maps every failure onto the outcome a screen shows to the user.

use std::collections::BTreeMap;
use thiserror::Error;

/// Message shown when the server gives no usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Main error type for CourtDesk
#[derive(Error, Debug)]
pub enum CourtDeskError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication required: {0}")]
    Authentication(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures reported by the remote REST API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16 },

    #[error("resource not found: {path}")]
    NotFound { path: String },

    #[error("request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for CourtDesk operations
pub type Result<T> = std::result::Result<T, CourtDeskError>;

/// Field name to error messages, ordered for stable display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Convert into a `Result`, failing when any field error was recorded
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CourtDeskError::Validation(self))
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// What a screen does after a failed user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorOutcome {
    /// Missing or expired credentials: go to the login screen.
    RedirectToLogin { message: String },
    /// The record is gone: go back to the parent list.
    RedirectToList { message: String },
    /// Generic failure: show a toast.
    Notify { message: String },
    /// Client-side validation failed: mark fields and block submission.
    FieldErrors { errors: FieldErrors, message: String },
}

impl ErrorOutcome {
    /// Toast text carried by the outcome
    pub fn message(&self) -> &str {
        match self {
            ErrorOutcome::RedirectToLogin { message }
            | ErrorOutcome::RedirectToList { message }
            | ErrorOutcome::Notify { message }
            | ErrorOutcome::FieldErrors { message, .. } => message,
        }
    }
}

impl CourtDeskError {
    /// Map the error onto the user-facing outcome
    pub fn outcome(&self) -> ErrorOutcome {
        match self {
            e if e.requires_login() => ErrorOutcome::RedirectToLogin {
                message: "Your session has expired. Please log in again.".to_string(),
            },
            CourtDeskError::NotFound { resource, .. } => ErrorOutcome::RedirectToList {
                message: format!("The requested {} no longer exists.", resource),
            },
            CourtDeskError::Api(ApiError::NotFound { .. }) => ErrorOutcome::RedirectToList {
                message: "The requested record no longer exists.".to_string(),
            },
            CourtDeskError::Validation(errors) => ErrorOutcome::FieldErrors {
                errors: errors.clone(),
                message: "Please correct the highlighted fields.".to_string(),
            },
            CourtDeskError::Api(ApiError::RequestFailed { message, .. }) if !message.trim().is_empty() => {
                ErrorOutcome::Notify { message: message.clone() }
            }
            CourtDeskError::InvalidStateTransition { from, to } => ErrorOutcome::Notify {
                message: format!("Cannot change status from {} to {}.", from, to),
            },
            CourtDeskError::InvalidInput(message) => ErrorOutcome::Notify { message: message.clone() },
            _ => ErrorOutcome::Notify {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            },
        }
    }

    /// Missing, expired or rejected credentials
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            CourtDeskError::Authentication(_) | CourtDeskError::Api(ApiError::Unauthorized { .. })
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CourtDeskError::Config(_) => ErrorSeverity::Critical,
            CourtDeskError::Authentication(_) => ErrorSeverity::Warning,
            CourtDeskError::Api(ApiError::Unauthorized { .. }) => ErrorSeverity::Warning,
            CourtDeskError::NotFound { .. } => ErrorSeverity::Warning,
            CourtDeskError::Validation(_) => ErrorSeverity::Info,
            CourtDeskError::InvalidStateTransition { .. } => ErrorSeverity::Info,
            CourtDeskError::InvalidInput(_) => ErrorSeverity::Info,
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
