//! Host-side component wiring a picker field to terminal input and a dialog.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::error;
use ratatui::{layout::Rect, Frame};

use crate::error::FieldError;
use crate::picker::{DatePickerField, DialogOutcome, FieldView, FieldViewState, PickerState, Region};
use crate::ui::components::dialogs::{PickerDialog, TerminalDialog};
use crate::ui::core::{Action, Component};

/// A [`DatePickerField`] living in a terminal form.
///
/// Enter, Space or a left click on a region is a tap. While the field's
/// dialog is shown every key goes to the dialog.
pub struct DatePickerComponent {
    field: DatePickerField,
    dialog: Box<dyn PickerDialog>,
    view_state: FieldViewState,
    has_focus: bool,
}

impl DatePickerComponent {
    pub fn new(field: DatePickerField) -> Self {
        Self::with_dialog(field, Box::new(TerminalDialog::new()))
    }

    pub fn with_dialog(field: DatePickerField, dialog: Box<dyn PickerDialog>) -> Self {
        Self {
            field,
            dialog,
            view_state: FieldViewState::default(),
            has_focus: false,
        }
    }

    pub fn field(&self) -> &DatePickerField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut DatePickerField {
        &mut self.field
    }

    /// Render the field without drawing it
    pub fn view(&self) -> Result<Option<FieldView>, FieldError> {
        self.field.render()
    }

    /// Lines the field needs, zero when hidden or misconfigured
    pub fn height(&self) -> u16 {
        match self.view() {
            Ok(Some(view)) => view.height(),
            _ => 0,
        }
    }

    pub fn focused_region(&self) -> Option<Region> {
        self.view_state.focused
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Whether the last draw put a tappable region under this position
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.view_state.region_at(column, row).is_some()
    }

    fn regions(&self) -> Vec<Region> {
        match self.view() {
            Ok(Some(view)) if view.interactive => view.regions(),
            _ => Vec::new(),
        }
    }

    /// Keep the focused region valid for the current mode
    fn ensure_focus(&mut self) {
        if !self.has_focus {
            self.view_state.focused = None;
            return;
        }
        let regions = self.regions();
        match self.view_state.focused {
            Some(region) if regions.contains(&region) => {}
            _ => self.view_state.focused = regions.first().copied(),
        }
    }

    fn move_focus(&mut self, forward: bool) -> Action {
        let regions = self.regions();
        let current = self
            .view_state
            .focused
            .and_then(|focused| regions.iter().position(|r| *r == focused));

        let next = match (current, forward) {
            (Some(index), true) if index + 1 < regions.len() => Some(index + 1),
            (Some(index), false) if index > 0 => Some(index - 1),
            _ => None,
        };

        match next {
            Some(index) => {
                self.view_state.focused = Some(regions[index]);
                Action::None
            }
            None if forward => Action::FocusNext,
            None => Action::FocusPrevious,
        }
    }

    /// Show or hide the dialog to match the field's state
    fn sync_dialog(&mut self) {
        match self.field.state() {
            PickerState::Shown(request) => self.dialog.present(*request),
            PickerState::Hidden => self.dialog.dismiss(),
        }
    }

    fn tap(&mut self, region: Region) {
        self.view_state.focused = Some(region);
        if self.field.tap(region).is_some() {
            self.sync_dialog();
        }
    }

    fn complete(&mut self, outcome: DialogOutcome) -> Action {
        let changed = self.field.complete(outcome);
        self.sync_dialog();
        match changed {
            Some(value) => Action::ValueChanged(value),
            None => Action::DialogCancelled,
        }
    }

    /// Draw the dialog, if open, over `area`
    pub fn render_dialog(&mut self, f: &mut Frame, area: Rect) {
        if self.dialog.is_open() {
            self.dialog.render(f, area);
        }
    }
}

impl Component for DatePickerComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_open() {
            return match self.dialog.handle_key(key) {
                Some(outcome) => self.complete(outcome),
                None => Action::None,
            };
        }

        self.ensure_focus();
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => match self.view_state.focused {
                Some(region) => Action::Tap(region),
                None => Action::None,
            },
            KeyCode::Tab | KeyCode::Right => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Left => self.move_focus(false),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_open() {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.view_state.region_at(mouse.column, mouse.row) {
                Some(region) => Action::Tap(region),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Tap(region) => {
                self.tap(region);
                Action::None
            }
            Action::ValueChanged(value) => {
                // The host re-renders with the value it accepted
                self.field.set_value(Some(value));
                Action::ValueChanged(value)
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.ensure_focus();
        match self.field.render() {
            Ok(Some(view)) => f.render_stateful_widget(&view, rect, &mut self.view_state),
            Ok(None) => self.view_state.hit_areas.clear(),
            Err(e) => {
                error!("Not drawing date picker field: {}", e);
                self.view_state.hit_areas.clear();
            }
        }
    }

    fn on_focus(&mut self) {
        self.has_focus = true;
        self.ensure_focus();
    }

    fn on_blur(&mut self) {
        self.has_focus = false;
        self.view_state.focused = None;
    }
}
