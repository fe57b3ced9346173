use chrono::NaiveDateTime;

use crate::picker::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Field interaction
    Tap(Region),
    FocusNext,
    FocusPrevious,

    // Dialog results
    ValueChanged(NaiveDateTime),
    DialogCancelled,

    // App control
    Quit,
    None,
}
