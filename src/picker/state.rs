//! Transient dialog state owned by a field instance.

use chrono::NaiveDateTime;

use super::mode::{DialogMode, SubMode};

/// What the dialog is opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRequest {
    /// Current value, or "now" when the field is unset
    pub initial: NaiveDateTime,
    pub sub_mode: SubMode,
    pub minimum: Option<NaiveDateTime>,
    pub maximum: Option<NaiveDateTime>,
    pub dialog_mode: DialogMode,
}

/// How the dialog finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Selected(NaiveDateTime),
    Cancelled,
}

/// Dialog visibility of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Shown(DialogRequest),
}

impl PickerState {
    pub fn is_shown(&self) -> bool {
        matches!(self, PickerState::Shown(_))
    }

    pub fn sub_mode(&self) -> Option<SubMode> {
        match self {
            PickerState::Shown(request) => Some(request.sub_mode),
            PickerState::Hidden => None,
        }
    }

    pub fn request(&self) -> Option<&DialogRequest> {
        match self {
            PickerState::Shown(request) => Some(request),
            PickerState::Hidden => None,
        }
    }
}

/// Dialog behaviour of the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// The dialog closes itself once a value is selected. When false the
    /// picker is presented inline and stays open until cancelled.
    pub auto_dismiss: bool,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self { auto_dismiss: true }
    }
}
