//! Demo form hosting several date picker fields.

use chrono::Duration;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use log::{debug, info};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::logger::Logger;
use crate::picker::{DatePickerField, FieldProps, FormatConfig, StyleSet};
use crate::ui::components::dialogs::common::{create_instructions_paragraph, shortcuts};
use crate::ui::components::DatePickerComponent;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;

const LOG_PANE_HEIGHT: u16 = 8;
const DEPARTURE_FIELD: usize = 2;

/// A form of date picker fields with a log pane and a status bar
pub struct App {
    pub fields: Vec<DatePickerComponent>,
    pub focused: usize,
    pub logger: Logger,
    should_quit: bool,
}

impl App {
    /// Build the demo form from the loaded configuration.
    ///
    /// Fails if any field is misconfigured, so no partial form is shown.
    pub fn new(config: &Config, logger: Logger) -> anyhow::Result<Self> {
        let stylesheet = StyleSet::from_theme(&config.theme)?;
        let platform = config.platform.capabilities();
        let today = datetime::now();

        let appointment = FieldProps::new("date")
            .label("Appointment date")
            .help("Within the next 90 days")
            .minimum(today)
            .maximum(today + Duration::days(90))
            .config(FormatConfig::from_display_config(&config.display))
            .stylesheet(stylesheet.clone())
            .on_press(|| debug!("Appointment date pressed"))
            .on_change(|value| info!("Appointment date set to {}", value));

        let reminder = FieldProps::new("time")
            .label("Reminder time")
            .config(FormatConfig::from_display_config(&config.display))
            .stylesheet(stylesheet.clone())
            .on_change(|value| info!("Reminder time set to {}", value.time()));

        let departure = FieldProps::new("datetime")
            .label("Departure")
            .help("Tab switches between date and time")
            .config(FormatConfig::from_display_config(&config.display))
            .stylesheet(stylesheet.clone())
            .on_press(|| debug!("Departure pressed"))
            .on_change(|value| info!("Departure set to {}", value));

        let created = FieldProps::new("datetime")
            .label("Created")
            .value(today)
            .disabled(true)
            .config(FormatConfig::from_display_config(&config.display))
            .stylesheet(stylesheet);

        let fields: Vec<DatePickerComponent> = [appointment, reminder, departure, created]
            .into_iter()
            .map(|props| DatePickerComponent::new(DatePickerField::new(props).with_platform(platform)))
            .collect();

        for component in &fields {
            component.view()?;
        }

        let mut app = Self {
            fields,
            focused: 0,
            logger,
            should_quit: false,
        };
        app.fields[0].on_focus();
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn focus(&mut self, index: usize) {
        if index == self.focused || index >= self.fields.len() {
            return;
        }
        self.fields[self.focused].on_blur();
        self.focused = index;
        self.fields[self.focused].on_focus();
    }

    fn focus_next(&mut self) {
        self.focus((self.focused + 1) % self.fields.len());
    }

    fn focus_previous(&mut self) {
        self.focus((self.focused + self.fields.len() - 1) % self.fields.len());
    }

    /// Host-side validation: departures must lie in the future
    fn validate_departure(&mut self) {
        let field = self.fields[DEPARTURE_FIELD].field_mut();
        let in_past = field.value().is_some_and(|value| value < datetime::now());
        let props = field.props_mut();
        props.has_error = in_past;
        props.error = in_past.then(|| "Departure must be in the future".to_string());
    }

    /// Handle an action that bubbled out of the focused field
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.focus_next(),
            Action::FocusPrevious => self.focus_previous(),
            Action::ValueChanged(_) if self.focused == DEPARTURE_FIELD => self.validate_departure(),
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    fn render_logs(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .logger
            .get_logs()
            .into_iter()
            .take(area.height.saturating_sub(2) as usize)
            .map(|line| ListItem::new(Line::from(Span::styled(line, Style::default().fg(Color::Gray)))))
            .collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));
        f.render_widget(list, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        if self.fields[self.focused].is_dialog_open() {
            f.render_widget(Paragraph::new(""), area);
            return;
        }
        let instructions = [
            ("Enter", Color::Green, " Open"),
            shortcuts::SEPARATOR,
            ("Tab", Color::Cyan, " Next"),
            shortcuts::SEPARATOR,
            ("↑↓", Color::Cyan, " Field"),
            shortcuts::SEPARATOR,
            ("q", Color::Red, " Quit"),
        ];
        f.render_widget(create_instructions_paragraph(&instructions), area);
    }
}

impl Component for App {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let dialog_open = self.fields[self.focused].is_dialog_open();
        if !dialog_open {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
                KeyCode::Down | KeyCode::Char('j') => return Action::FocusNext,
                KeyCode::Up | KeyCode::Char('k') => return Action::FocusPrevious,
                _ => {}
            }
        }

        let field = &mut self.fields[self.focused];
        let action = field.handle_key_events(key);
        field.update(action)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.fields[self.focused].is_dialog_open() {
            return Action::None;
        }
        let Some(index) = self.fields.iter().position(|c| c.contains(mouse.column, mouse.row)) else {
            return Action::None;
        };
        self.focus(index);
        let field = &mut self.fields[index];
        let action = field.handle_mouse_events(mouse);
        field.update(action)
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_action(action.clone());
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect, LOG_PANE_HEIGHT);
        let form_block = Block::default().borders(Borders::ALL).title(" Date picker demo ");
        let form_area = form_block.inner(chunks[0]);
        f.render_widget(form_block, chunks[0]);

        let heights: Vec<u16> = self.fields.iter().map(|c| c.height()).collect();
        let areas = LayoutManager::form_layout(form_area, &heights);
        for (component, area) in self.fields.iter_mut().zip(areas) {
            component.render(f, area);
        }

        self.render_logs(f, chunks[1]);
        self.render_status(f, chunks[2]);
        self.fields[self.focused].render_dialog(f, rect);
    }
}
