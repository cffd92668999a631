use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    ValidationError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error.
///
/// `field_errors` carries per-field validation messages so a form can show
/// them under the offending input rather than in a single banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation_with_fields(
        message: impl Into<String>,
        field_errors: HashMap<String, String>,
    ) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// A user-friendly message for this error, falling back to a generic
    /// one when the stored message is empty.
    pub fn friendly_message(&self) -> String {
        if self.message.is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::validation("Please enter your email");
        assert_eq!(err.to_string(), "ValidationError: Please enter your email");
    }

    #[test]
    fn validation_constructor_has_no_field_errors() {
        let err = AppError::validation("missing input");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn friendly_message_falls_back_when_empty() {
        let err = AppError::internal("");
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn friendly_message_uses_stored_message() {
        let err = AppError::validation("Please enter your email");
        assert_eq!(err.friendly_message(), "Please enter your email");
    }

    #[test]
    fn field_errors_skipped_when_empty() {
        let err = AppError::validation("missing input");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
