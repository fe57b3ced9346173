//! Month-grid presentation of the date dialog.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::utils::datetime::{add_days, add_months, month_grid};

/// Lines the calendar body needs: title, weekday header, six weeks
pub const CALENDAR_HEIGHT: u16 = 8;

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Move the cursor for a calendar key, `None` if the key is not a move
pub fn navigate(cursor: NaiveDateTime, key: KeyEvent) -> Option<NaiveDateTime> {
    let moved = match key.code {
        KeyCode::Left | KeyCode::Char('h') => add_days(cursor, -1),
        KeyCode::Right | KeyCode::Char('l') => add_days(cursor, 1),
        KeyCode::Up | KeyCode::Char('k') => add_days(cursor, -7),
        KeyCode::Down | KeyCode::Char('j') => add_days(cursor, 7),
        KeyCode::PageUp | KeyCode::Char('<') => add_months(cursor, -1),
        KeyCode::PageDown | KeyCode::Char('>') => add_months(cursor, 1),
        KeyCode::Home => cursor.with_day(1).unwrap_or(cursor),
        _ => return None,
    };
    Some(moved)
}

/// Render the month containing `cursor`, highlighting the cursor day
pub fn render_calendar(
    f: &mut Frame,
    area: Rect,
    cursor: NaiveDateTime,
    minimum: Option<NaiveDateTime>,
    maximum: Option<NaiveDateTime>,
) {
    let date = cursor.date();
    let in_bounds = |day: NaiveDate| {
        minimum.map_or(true, |min| day >= min.date()) && maximum.map_or(true, |max| day <= max.date())
    };

    let mut lines = vec![
        Line::from(Span::styled(
            date.format("%B %Y").to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(WEEKDAY_HEADER, Style::default().fg(Color::Gray))),
    ];

    for week in month_grid(date) {
        let mut spans = Vec::with_capacity(14);
        for (column, cell) in week.iter().enumerate() {
            if column > 0 {
                spans.push(Span::raw(" "));
            }
            let span = match cell.and_then(|day| date.with_day(day)) {
                Some(day) => {
                    let style = if day == date {
                        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else if !in_bounds(day) {
                        Style::default().fg(Color::DarkGray)
                    } else if column >= 5 {
                        Style::default().fg(Color::LightBlue)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!("{:>2}", day.day()), style)
                }
                None => Span::raw("  "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        let cursor = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
        let date_after = |code| navigate(cursor, key(code)).map(|c| c.date());
        assert_eq!(date_after(KeyCode::Right), NaiveDate::from_ymd_opt(2024, 3, 16));
        assert_eq!(date_after(KeyCode::Up), NaiveDate::from_ymd_opt(2024, 3, 8));
        assert_eq!(date_after(KeyCode::PageDown), NaiveDate::from_ymd_opt(2024, 4, 15));
        assert_eq!(date_after(KeyCode::Home), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(navigate(cursor, key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_navigation_keeps_time_of_day() {
        let cursor = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
        let moved = navigate(cursor, key(KeyCode::Down)).unwrap();
        assert_eq!(moved.time(), cursor.time());
    }
}
