//! Date/time picker form field.
//!
//! A field is rendered from [`FieldProps`] into a [`FieldView`] tree on every
//! host render. Taps open a selection dialog through a [`DialogRequest`];
//! the dialog's [`DialogOutcome`] is merged back into the value and reported
//! through the `on_change` callback.
//!
//! # Module Components
//!
//! - [`field`] - Props, the field instance, tap and completion handling
//! - [`format`] - Display text resolution and user formatters
//! - [`mode`] - Display, sub- and dialog modes
//! - [`state`] - Transient dialog state and platform capabilities
//! - [`style`] - Stylesheet trait and the default style set
//! - [`view`] - The rendered UI tree and its ratatui drawing

pub mod field;
pub mod format;
pub mod mode;
pub mod state;
pub mod style;
pub mod view;

pub use field::{ChangeCallback, DatePickerField, FieldProps, PressCallback};
pub use format::{DisplayText, FormatConfig, Formatter};
pub use mode::{DialogMode, DisplayMode, SubMode};
pub use state::{DialogOutcome, DialogRequest, PickerState, PlatformCapabilities};
pub use style::{FieldState, ResolvedStyles, StyleSet, StyleVariant, Stylesheet};
pub use view::{FieldBody, FieldView, FieldViewState, Region, StyledText, TapRegion};
