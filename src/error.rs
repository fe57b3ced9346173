//! Error types raised while rendering a picker field.

use chrono::NaiveDateTime;

/// Configuration errors detected at render time.
///
/// These are caller mistakes, not user input problems: a field with an
/// unknown mode or inverted bounds never renders a partial control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Unrecognized date picker format {0}")]
    UnrecognizedMode(String),

    #[error("Invalid date bounds: minimum {minimum} is after maximum {maximum}")]
    InvalidBounds {
        minimum: NaiveDateTime,
        maximum: NaiveDateTime,
    },
}
