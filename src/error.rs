//! Crate error type.
//!
//! Unschedulable demand is not an error: leftover hours are reported in
//! [`GeneratedTimetable::unscheduled`](crate::scheduler::GeneratedTimetable).
//! Errors are structural only.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by timetable generation and its request surface.
#[derive(Error, Debug)]
pub enum TimetableError {
    /// Input failed structural validation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Request body was not valid JSON for the expected shape.
    #[error("malformed request: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    /// Configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Response could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl TimetableError {
    /// Whether the caller supplied bad input (as opposed to a server-side fault).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TimetableError::InvalidInput(_) | TimetableError::MalformedRequest(_)
        )
    }
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        TimetableError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
