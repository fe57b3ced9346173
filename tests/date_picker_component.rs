use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use datefield::picker::{DatePickerField, FieldProps, FormatConfig, PlatformCapabilities, Region};
use datefield::ui::components::DatePickerComponent;
use datefield::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Handle a key the way the host loop does: component first, then update
fn press(component: &mut DatePickerComponent, code: KeyCode) -> Action {
    let action = component.handle_events(Some(Event::Key(key(code))));
    component.update(action)
}

fn draw(component: &mut DatePickerComponent, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| component.render(f, f.area())).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn datetime_component() -> DatePickerComponent {
    let field = DatePickerField::new(FieldProps::new("datetime").label("Departure").value(at(2024, 3, 15, 10, 30)));
    let mut component = DatePickerComponent::new(field);
    component.on_focus();
    component
}

#[test]
fn test_renders_label_and_both_regions() {
    let mut component = datetime_component();
    let buffer = draw(&mut component, 40, 3);
    assert_eq!(row_text(&buffer, 0), "Departure");
    assert_eq!(row_text(&buffer, 1), "Fri Mar 15 2024  10:30:00");
}

#[test]
fn test_renders_help_and_error_lines() {
    let field = DatePickerField::new(
        FieldProps::new("date")
            .label("Birthday")
            .help("As on your passport")
            .error("Required"),
    );
    let mut component = DatePickerComponent::new(field);
    assert_eq!(component.height(), 4);
    let buffer = draw(&mut component, 40, 4);
    assert_eq!(row_text(&buffer, 0), "Birthday");
    assert_eq!(row_text(&buffer, 1), "Tap here to select a date");
    assert_eq!(row_text(&buffer, 2), "As on your passport");
    assert_eq!(row_text(&buffer, 3), "Required");
}

#[test]
fn test_hidden_field_draws_nothing() {
    let field = DatePickerField::new(FieldProps::new("date").label("Hidden").hidden(true));
    let mut component = DatePickerComponent::new(field);
    assert_eq!(component.height(), 0);
    let buffer = draw(&mut component, 20, 2);
    assert_eq!(row_text(&buffer, 0), "");
    assert!(!component.contains(0, 0));
}

#[test]
fn test_keyboard_date_selection() {
    let mut component = datetime_component();
    draw(&mut component, 40, 3);
    assert_eq!(component.focused_region(), Some(Region::Date));

    press(&mut component, KeyCode::Enter);
    assert!(component.is_dialog_open());

    // One week forward in the calendar, then select
    press(&mut component, KeyCode::Down);
    let action = press(&mut component, KeyCode::Enter);
    assert_eq!(action, Action::ValueChanged(at(2024, 3, 22, 10, 30)));
    assert!(!component.is_dialog_open());
    assert_eq!(component.field().value(), Some(at(2024, 3, 22, 10, 30)));
}

#[test]
fn test_keyboard_time_selection() {
    let mut component = datetime_component();
    press(&mut component, KeyCode::Tab);
    assert_eq!(component.focused_region(), Some(Region::Time));

    press(&mut component, KeyCode::Enter);
    // Hour up twice, then minute down once
    press(&mut component, KeyCode::Up);
    press(&mut component, KeyCode::Up);
    press(&mut component, KeyCode::Tab);
    press(&mut component, KeyCode::Down);
    let action = press(&mut component, KeyCode::Enter);
    assert_eq!(action, Action::ValueChanged(at(2024, 3, 15, 12, 29)));
}

#[test]
fn test_calendar_selection_on_minimum_day_respects_minimum_time() {
    let field = DatePickerField::new(
        FieldProps::new("datetime")
            .value(at(2024, 3, 15, 8, 0))
            .minimum(at(2024, 3, 10, 12, 0)),
    );
    let mut component = DatePickerComponent::new(field);
    component.on_focus();

    press(&mut component, KeyCode::Enter);
    for _ in 0..10 {
        press(&mut component, KeyCode::Left);
    }
    let action = press(&mut component, KeyCode::Enter);
    assert_eq!(action, Action::ValueChanged(at(2024, 3, 10, 12, 0)));
    assert_eq!(component.field().value(), Some(at(2024, 3, 10, 12, 0)));
}

#[test]
fn test_very_long_date_text_fills_the_row() {
    let config = FormatConfig::new().with_date_format(|_| "x".repeat(65_540));
    let field = DatePickerField::new(FieldProps::new("datetime").value(at(2024, 3, 15, 10, 30)).config(config));
    let mut component = DatePickerComponent::new(field);
    let buffer = draw(&mut component, 40, 1);
    assert!(row_text(&buffer, 0).starts_with(&"x".repeat(30)));
}

#[test]
fn test_escape_cancels_without_change() {
    let mut component = datetime_component();
    press(&mut component, KeyCode::Enter);
    press(&mut component, KeyCode::Right);
    let action = press(&mut component, KeyCode::Esc);
    assert_eq!(action, Action::DialogCancelled);
    assert!(!component.is_dialog_open());
    assert_eq!(component.field().value(), Some(at(2024, 3, 15, 10, 30)));
}

#[test]
fn test_tab_past_last_region_leaves_field() {
    let mut component = datetime_component();
    assert_eq!(press(&mut component, KeyCode::Tab), Action::None);
    assert_eq!(press(&mut component, KeyCode::Tab), Action::FocusNext);
    assert_eq!(press(&mut component, KeyCode::BackTab), Action::None);
    assert_eq!(press(&mut component, KeyCode::BackTab), Action::FocusPrevious);
}

#[test]
fn test_disabled_field_ignores_enter() {
    let field = DatePickerField::new(FieldProps::new("date").value(at(2024, 3, 15, 10, 30)).disabled(true));
    let mut component = DatePickerComponent::new(field);
    component.on_focus();
    assert_eq!(press(&mut component, KeyCode::Enter), Action::None);
    assert!(!component.is_dialog_open());
}

#[test]
fn test_mouse_click_taps_region() {
    let mut component = datetime_component();
    draw(&mut component, 40, 3);

    // "Fri Mar 15 2024" occupies columns 0..15 of row 1, time starts at 17
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 18,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    let action = component.handle_events(Some(Event::Mouse(click)));
    assert_eq!(action, Action::Tap(Region::Time));
    component.update(action);
    assert!(component.is_dialog_open());
    assert_eq!(component.field().state().request().map(|r| r.initial), Some(at(2024, 3, 15, 10, 30)));
}

#[test]
fn test_inline_platform_keeps_dialog_open_after_selection() {
    let field = DatePickerField::new(FieldProps::new("date").value(at(2024, 3, 15, 10, 30)))
        .with_platform(PlatformCapabilities { auto_dismiss: false });
    let mut component = DatePickerComponent::new(field);
    component.on_focus();

    press(&mut component, KeyCode::Enter);
    press(&mut component, KeyCode::Right);
    let action = press(&mut component, KeyCode::Enter);
    assert_eq!(action, Action::ValueChanged(at(2024, 3, 16, 10, 30)));
    assert!(component.is_dialog_open());

    press(&mut component, KeyCode::Esc);
    assert!(!component.is_dialog_open());
}

#[test]
fn test_dialog_overlay_renders_month() {
    let mut component = datetime_component();
    press(&mut component, KeyCode::Enter);

    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|f| {
            component.render(f, f.area());
            component.render_dialog(f, f.area());
        })
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let screen: Vec<String> = (0..buffer.area.height).map(|y| row_text(&buffer, y)).collect();
    assert!(screen.iter().any(|line| line.contains("March 2024")));
    assert!(screen.iter().any(|line| line.contains("Mo Tu We Th Fr Sa Su")));
}
