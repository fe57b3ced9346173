use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

use super::calendar::{self, CALENDAR_HEIGHT};
use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts, InstructionShortcut};
use super::spinner::{Spinner, SPINNER_HEIGHT};
use super::PickerDialog;
use crate::constants::{DIALOG_TITLE_DATE, DIALOG_TITLE_TIME, DIALOG_WIDTH_PERCENT};
use crate::picker::{DialogMode, DialogOutcome, DialogRequest, SubMode};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::clamp_to_bounds;

/// How the open dialog lets the user pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Calendar,
    Spinner(Spinner),
}

impl Presentation {
    /// Calendars only make sense for dates; time is always a spinner
    pub fn for_request(request: &DialogRequest) -> Self {
        match (request.sub_mode, request.dialog_mode) {
            (SubMode::Date, DialogMode::Calendar | DialogMode::Default) => Presentation::Calendar,
            (sub_mode, _) => Presentation::Spinner(Spinner::new(sub_mode)),
        }
    }
}

/// Modal date/time dialog drawn over the terminal UI.
///
/// The cursor always stays within the request's bounds; Enter selects it
/// and Esc cancels.
#[derive(Debug, Default)]
pub struct TerminalDialog {
    open: Option<(DialogRequest, Presentation)>,
    cursor: Option<NaiveDateTime>,
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value Enter would select
    pub fn cursor(&self) -> Option<NaiveDateTime> {
        self.cursor
    }

    pub fn presentation(&self) -> Option<Presentation> {
        self.open.map(|(_, presentation)| presentation)
    }

    fn instructions(presentation: &Presentation) -> Vec<InstructionShortcut> {
        let moves = match presentation {
            Presentation::Calendar => vec![shortcuts::ARROWS_MOVE, shortcuts::SEPARATOR, shortcuts::PAGE_MONTH],
            Presentation::Spinner(_) => vec![shortcuts::ARROWS_ADJUST, shortcuts::SEPARATOR, shortcuts::TAB_FIELD],
        };
        let mut instructions = moves;
        instructions.extend([
            shortcuts::SEPARATOR,
            shortcuts::ENTER_SELECT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        instructions
    }
}

impl PickerDialog for TerminalDialog {
    fn present(&mut self, request: DialogRequest) {
        let presentation = Presentation::for_request(&request);
        debug!("Presenting {:?} dialog at {}", presentation, request.initial);
        self.cursor = Some(clamp_to_bounds(request.initial, request.minimum, request.maximum));
        self.open = Some((request, presentation));
    }

    fn dismiss(&mut self) {
        self.open = None;
        self.cursor = None;
    }

    fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<DialogOutcome> {
        let (request, presentation) = self.open.as_mut()?;
        let cursor = self.cursor?;

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(DialogOutcome::Cancelled),
            KeyCode::Enter | KeyCode::Char(' ') => return Some(DialogOutcome::Selected(cursor)),
            _ => {}
        }

        let moved = match presentation {
            Presentation::Calendar => calendar::navigate(cursor, key),
            Presentation::Spinner(spinner) => spinner.handle_key(cursor, key),
        };
        if let Some(moved) = moved {
            self.cursor = Some(clamp_to_bounds(moved, request.minimum, request.maximum));
        }
        None
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let (Some((request, presentation)), Some(cursor)) = (self.open.as_ref(), self.cursor) else {
            return;
        };

        let (title, body_height) = match presentation {
            Presentation::Calendar => (DIALOG_TITLE_DATE, CALENDAR_HEIGHT),
            Presentation::Spinner(spinner) => match spinner.sub_mode {
                SubMode::Date => (DIALOG_TITLE_DATE, SPINNER_HEIGHT),
                SubMode::Time => (DIALOG_TITLE_TIME, SPINNER_HEIGHT),
            },
        };

        // borders + body + spacer + instructions
        let dialog_area = LayoutManager::centered_rect_lines(DIALOG_WIDTH_PERCENT, body_height + 4, area);
        f.render_widget(Clear, dialog_area);

        let block = create_dialog_block(title, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(body_height),
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Instructions
            ])
            .split(inner);

        match presentation {
            Presentation::Calendar => {
                calendar::render_calendar(f, chunks[0], cursor, request.minimum, request.maximum);
            }
            Presentation::Spinner(spinner) => spinner.render(f, chunks[0], cursor),
        }

        let instructions = Self::instructions(presentation);
        f.render_widget(create_instructions_paragraph(&instructions), chunks[2]);
    }
}
