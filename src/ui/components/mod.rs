//! Reusable UI components

pub mod date_picker_component;
pub mod dialogs;

// Component exports
pub use date_picker_component::DatePickerComponent;
pub use dialogs::{PickerDialog, TerminalDialog};
