//! Spinner presentation: one adjustable field per date or time component.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::picker::SubMode;
use crate::utils::datetime::{add_days, add_months};

/// Lines the spinner body needs: arrows above, values, arrows below
pub const SPINNER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl SpinnerField {
    /// Fields shown for a sub-mode, in focus order
    pub fn for_sub_mode(sub_mode: SubMode) -> &'static [SpinnerField] {
        match sub_mode {
            SubMode::Date => &[SpinnerField::Year, SpinnerField::Month, SpinnerField::Day],
            SubMode::Time => &[SpinnerField::Hour, SpinnerField::Minute],
        }
    }

    fn value(&self, cursor: NaiveDateTime) -> String {
        match self {
            SpinnerField::Year => format!("{:04}", cursor.year()),
            SpinnerField::Month => format!("{:02}", cursor.month()),
            SpinnerField::Day => format!("{:02}", cursor.day()),
            SpinnerField::Hour => format!("{:02}", cursor.hour()),
            SpinnerField::Minute => format!("{:02}", cursor.minute()),
        }
    }

    /// Step this field by `delta`. Hours and minutes wrap within the day.
    pub fn step(&self, cursor: NaiveDateTime, delta: i32) -> NaiveDateTime {
        match self {
            SpinnerField::Year => add_months(cursor, delta * 12),
            SpinnerField::Month => add_months(cursor, delta),
            SpinnerField::Day => add_days(cursor, i64::from(delta)),
            SpinnerField::Hour => {
                NaiveDateTime::new(cursor.date(), cursor.time() + Duration::hours(i64::from(delta)))
            }
            SpinnerField::Minute => {
                NaiveDateTime::new(cursor.date(), cursor.time() + Duration::minutes(i64::from(delta)))
            }
        }
    }
}

/// Spinner focus and key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    pub sub_mode: SubMode,
    pub focused: usize,
}

impl Spinner {
    pub fn new(sub_mode: SubMode) -> Self {
        Self { sub_mode, focused: 0 }
    }

    pub fn fields(&self) -> &'static [SpinnerField] {
        SpinnerField::for_sub_mode(self.sub_mode)
    }

    pub fn focused_field(&self) -> SpinnerField {
        let fields = self.fields();
        fields[self.focused.min(fields.len() - 1)]
    }

    /// Apply a key, returning the new cursor if the key was handled
    pub fn handle_key(&mut self, cursor: NaiveDateTime, key: KeyEvent) -> Option<NaiveDateTime> {
        let count = self.fields().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => Some(self.focused_field().step(cursor, 1)),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => Some(self.focused_field().step(cursor, -1)),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.focused = (self.focused + 1) % count;
                Some(cursor)
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.focused = (self.focused + count - 1) % count;
                Some(cursor)
            }
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, cursor: NaiveDateTime) {
        let separator = match self.sub_mode {
            SubMode::Date => " - ",
            SubMode::Time => " : ",
        };

        let mut above = Vec::new();
        let mut values = Vec::new();
        let mut below = Vec::new();
        for (index, field) in self.fields().iter().enumerate() {
            if index > 0 {
                let gap = " ".repeat(separator.len());
                above.push(Span::raw(gap.clone()));
                values.push(Span::styled(separator, Style::default().fg(Color::Gray)));
                below.push(Span::raw(gap));
            }

            let text = field.value(cursor);
            let width = text.len();
            let focused = index == self.focused;
            let style = if focused {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let arrow = |glyph: &str| {
                if focused {
                    Span::styled(format!("{:^width$}", glyph), Style::default().fg(Color::Cyan))
                } else {
                    Span::raw(" ".repeat(width))
                }
            };
            above.push(arrow("▲"));
            values.push(Span::styled(text, style));
            below.push(arrow("▼"));
        }

        let lines = vec![Line::from(above), Line::from(values), Line::from(below)];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_minutes_wrap_within_day() {
        let cursor = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(23, 59, 0).unwrap();
        let stepped = SpinnerField::Minute.step(cursor, 1);
        assert_eq!(stepped, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let cursor = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
        let mut spinner = Spinner::new(SubMode::Time);
        assert_eq!(spinner.focused_field(), SpinnerField::Hour);
        spinner.handle_key(cursor, key(KeyCode::Tab));
        assert_eq!(spinner.focused_field(), SpinnerField::Minute);
        spinner.handle_key(cursor, key(KeyCode::Tab));
        assert_eq!(spinner.focused_field(), SpinnerField::Hour);
        spinner.handle_key(cursor, key(KeyCode::Left));
        assert_eq!(spinner.focused_field(), SpinnerField::Minute);
    }

    #[test]
    fn test_up_increments_focused_field() {
        let cursor = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
        let mut spinner = Spinner::new(SubMode::Date);
        let next = spinner.handle_key(cursor, key(KeyCode::Up)).unwrap();
        assert_eq!(next.year(), 2025);
        assert_eq!(spinner.handle_key(cursor, key(KeyCode::Enter)), None);
    }
}
