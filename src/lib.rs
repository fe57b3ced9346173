//! datefield - A form-field date/time picker for terminal user interfaces
//!
//! This library renders a date/time picker field from host-supplied props,
//! formats its value into display text, and opens a selection dialog on tap,
//! reporting the chosen value back through a callback. It ships a ratatui
//! host integration and a terminal dialog with calendar and spinner
//! presentations.
//!
//! # Modules
//!
//! * [`picker`] - The field itself: props, rendering, taps and completion
//! * [`config`] - Configuration management
//! * [`logger`] - Logging setup
//! * [`ui`] - Terminal components, dialogs and the demo form
//! * [`utils`] - Date arithmetic and color helpers

/// Configuration module for managing display and platform settings
pub mod config;

/// Constants and default values
pub mod constants;

/// Configuration errors raised by fields
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// The date picker form field
pub mod picker;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use error::FieldError;
pub use picker::{DatePickerField, FieldProps, FieldView};
