//! Error types for the weight loss calculator core

use thiserror::Error;

use crate::validation::get_field_display_label;

/// Input rejected before any calculation took place
///
/// This is the only failure the core can produce: a calculation either
/// succeeds deterministically or is refused up front.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation error: {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Display label for the offending field
    pub fn display_label(&self) -> &str {
        get_field_display_label(&self.field)
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label(), self.message)
    }
}

/// Result alias for core calculations
pub type CalcResult<T> = Result<T, ValidationError>;
