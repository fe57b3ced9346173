//! Modes a field is configured with and the dialog is opened in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// What a field edits, fixed for the field's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Date,
    Time,
    DateTime,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Date => "date",
            DisplayMode::Time => "time",
            DisplayMode::DateTime => "datetime",
        }
    }

    /// Sub-mode the single tappable region opens in.
    ///
    /// Datetime fields have two regions and pick per region instead.
    pub fn single_sub_mode(&self) -> Option<SubMode> {
        match self {
            DisplayMode::Date => Some(SubMode::Date),
            DisplayMode::Time => Some(SubMode::Time),
            DisplayMode::DateTime => None,
        }
    }
}

impl FromStr for DisplayMode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(DisplayMode::Date),
            "time" => Ok(DisplayMode::Time),
            "datetime" => Ok(DisplayMode::DateTime),
            other => Err(FieldError::UnrecognizedMode(other.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The half of a value the dialog is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubMode {
    #[default]
    Date,
    Time,
}

/// Presentation hint passed through to the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogMode {
    Calendar,
    Spinner,
    #[default]
    Default,
}
