//! User-facing notifications

use std::fmt;
use crate::utils::errors::{CourtDeskError, ErrorOutcome, ErrorSeverity, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        }
    }
}

impl From<ErrorSeverity> for NotificationLevel {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Info | ErrorSeverity::Warning => NotificationLevel::Warning,
            ErrorSeverity::Error | ErrorSeverity::Critical => NotificationLevel::Error,
        }
    }
}

/// Where the screen should go after showing the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    List,
}

/// A toast plus any navigation or field markers that go with it
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub redirect: Option<Redirect>,
    pub field_errors: Option<FieldErrors>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::plain(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::plain(NotificationLevel::Error, message)
    }

    fn plain(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            redirect: None,
            field_errors: None,
        }
    }

    /// Notification for a failed operation, levelled by the error's severity
    pub fn from_error(error: &CourtDeskError) -> Self {
        Self {
            level: error.severity().into(),
            ..Self::from(error.outcome())
        }
    }
}

impl From<ErrorOutcome> for Notification {
    fn from(outcome: ErrorOutcome) -> Self {
        match outcome {
            ErrorOutcome::RedirectToLogin { message } => Self {
                redirect: Some(Redirect::Login),
                ..Self::plain(NotificationLevel::Warning, message)
            },
            ErrorOutcome::RedirectToList { message } => Self {
                redirect: Some(Redirect::List),
                ..Self::plain(NotificationLevel::Error, message)
            },
            ErrorOutcome::Notify { message } => Self::error(message),
            ErrorOutcome::FieldErrors { errors, message } => Self {
                field_errors: Some(errors),
                ..Self::plain(NotificationLevel::Error, message)
            },
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)?;
        if let Some(errors) = &self.field_errors {
            write!(f, " ({})", errors)?;
        }
        Ok(())
    }
}
