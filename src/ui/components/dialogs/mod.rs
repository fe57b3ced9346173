//! Date/time selection dialogs

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::picker::{DialogOutcome, DialogRequest};

pub mod calendar;
pub mod common;
pub mod spinner;
mod terminal_dialog;

pub use terminal_dialog::{Presentation, TerminalDialog};

/// A modal date/time selector a field opens on tap.
///
/// The dialog only reports outcomes; whether it stays on screen afterwards
/// is decided by the field through [`present`] and [`dismiss`].
///
/// [`present`]: PickerDialog::present
/// [`dismiss`]: PickerDialog::dismiss
pub trait PickerDialog {
    fn present(&mut self, request: DialogRequest);

    fn dismiss(&mut self);

    fn is_open(&self) -> bool;

    /// Feed a key to the open dialog. Returns an outcome once the user
    /// selects or cancels.
    fn handle_key(&mut self, key: KeyEvent) -> Option<DialogOutcome>;

    fn render(&mut self, f: &mut Frame, area: Rect);
}
