//! Display text for a field value.

use chrono::NaiveDateTime;
use log::warn;
use ratatui::style::Style;
use std::fmt::{self, Write};

use super::mode::{DialogMode, DisplayMode};
use crate::config::DisplayConfig;
use crate::constants::{PLACEHOLDER_DATE, PLACEHOLDER_TIME};
use crate::utils::datetime;

/// User-supplied rendering of a value
pub type Formatter = Box<dyn Fn(&NaiveDateTime) -> String>;

/// Formatting and presentation options of a field
#[derive(Default)]
pub struct FormatConfig {
    /// Combined rendering used by single-region fields
    pub format: Option<Formatter>,
    /// Rendering of the date region in datetime mode
    pub date_format: Option<Formatter>,
    /// Rendering of the time region in datetime mode
    pub time_format: Option<Formatter>,
    /// Placeholder replacing the built-in "Tap here..." texts
    pub default_value_text: Option<String>,
    /// Feedback style of a focused tap region
    pub background: Option<Style>,
    pub dialog_mode: DialogMode,
}

impl fmt::Debug for FormatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatConfig")
            .field("format", &self.format.is_some())
            .field("date_format", &self.date_format.is_some())
            .field("time_format", &self.time_format.is_some())
            .field("default_value_text", &self.default_value_text)
            .field("background", &self.background)
            .field("dialog_mode", &self.dialog_mode)
            .finish()
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build formatters from the strftime patterns of a display config.
    ///
    /// The date and time patterns become the per-region formatters; the
    /// combined formatter is only set when the config carries one.
    pub fn from_display_config(display: &DisplayConfig) -> Self {
        Self {
            format: display.format.clone().map(pattern_formatter),
            date_format: Some(pattern_formatter(display.date_format.clone())),
            time_format: Some(pattern_formatter(display.time_format.clone())),
            default_value_text: display.default_value_text.clone(),
            background: None,
            dialog_mode: display.dialog_mode,
        }
    }

    pub fn with_format(mut self, format: impl Fn(&NaiveDateTime) -> String + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    pub fn with_date_format(mut self, format: impl Fn(&NaiveDateTime) -> String + 'static) -> Self {
        self.date_format = Some(Box::new(format));
        self
    }

    pub fn with_time_format(mut self, format: impl Fn(&NaiveDateTime) -> String + 'static) -> Self {
        self.time_format = Some(Box::new(format));
        self
    }

    pub fn with_default_value_text(mut self, text: impl Into<String>) -> Self {
        self.default_value_text = Some(text.into());
        self
    }

    pub fn with_background(mut self, style: Style) -> Self {
        self.background = Some(style);
        self
    }

    pub fn with_dialog_mode(mut self, mode: DialogMode) -> Self {
        self.dialog_mode = mode;
        self
    }

    fn placeholder<'a>(&'a self, builtin: &'a str) -> &'a str {
        self.default_value_text.as_deref().unwrap_or(builtin)
    }
}

/// Formatter for a strftime pattern. A pattern the value cannot satisfy
/// renders as the raw pattern instead of failing the render.
fn pattern_formatter(pattern: String) -> Formatter {
    Box::new(move |value: &NaiveDateTime| {
        let mut text = String::new();
        if write!(text, "{}", value.format(&pattern)).is_err() {
            warn!("Date pattern '{}' cannot format {}", pattern, value);
            return pattern.clone();
        }
        text
    })
}

/// Texts shown by one render of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    pub combined: String,
    pub date: String,
    pub time: String,
}

impl DisplayText {
    /// Resolve all three texts for a value.
    ///
    /// Each text falls back independently: formatter when a value exists,
    /// platform rendering when no formatter is set, placeholder when unset.
    pub fn compute(value: Option<&NaiveDateTime>, mode: DisplayMode, config: &FormatConfig) -> Self {
        let combined = match (value, &config.format) {
            (Some(v), Some(format)) => format(v),
            (Some(v), None) => match mode {
                DisplayMode::Date => datetime::to_date_string(v),
                DisplayMode::Time => datetime::to_time_string(v),
                DisplayMode::DateTime => datetime::to_datetime_string(v),
            },
            (None, _) => config.placeholder(PLACEHOLDER_DATE).to_string(),
        };

        let date = match (value, &config.date_format) {
            (Some(v), Some(format)) => format(v),
            (Some(v), None) => datetime::to_date_string(v),
            (None, _) => config.placeholder(PLACEHOLDER_DATE).to_string(),
        };

        let time = match (value, &config.time_format) {
            (Some(v), Some(format)) => format(v),
            (Some(v), None) => datetime::to_time_string(v),
            (None, _) => config.placeholder(PLACEHOLDER_TIME).to_string(),
        };

        Self { combined, date, time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(10, 30, 0).unwrap()
    }

    #[test]
    fn test_platform_renderings_without_formatters() {
        let text = DisplayText::compute(Some(&sample()), DisplayMode::DateTime, &FormatConfig::new());
        assert_eq!(text.date, "Fri Mar 15 2024");
        assert_eq!(text.time, "10:30:00");
        assert_eq!(text.combined, "Fri Mar 15 2024 10:30:00");
    }

    #[test]
    fn test_placeholders_when_unset() {
        let text = DisplayText::compute(None, DisplayMode::Date, &FormatConfig::new());
        assert_eq!(text.combined, "Tap here to select a date");
        assert_eq!(text.date, "Tap here to select a date");
        assert_eq!(text.time, "Tap here to select a time");
    }

    #[test]
    fn test_default_value_text_replaces_every_placeholder() {
        let config = FormatConfig::new().with_default_value_text("Pick one");
        let text = DisplayText::compute(None, DisplayMode::DateTime, &config);
        assert_eq!(text.combined, "Pick one");
        assert_eq!(text.date, "Pick one");
        assert_eq!(text.time, "Pick one");
    }

    #[test]
    fn test_formatters_only_apply_to_values() {
        let config = FormatConfig::new()
            .with_format(|v| v.format("%d/%m/%Y %H:%M").to_string())
            .with_date_format(|v| v.format("%d/%m").to_string());
        let text = DisplayText::compute(Some(&sample()), DisplayMode::DateTime, &config);
        assert_eq!(text.combined, "15/03/2024 10:30");
        assert_eq!(text.date, "15/03");
        assert_eq!(text.time, "10:30:00");

        let unset = DisplayText::compute(None, DisplayMode::DateTime, &config);
        assert_eq!(unset.combined, "Tap here to select a date");
    }

    #[test]
    fn test_unformattable_pattern_falls_back_to_pattern() {
        let display = DisplayConfig {
            date_format: "%d %z".to_string(),
            ..DisplayConfig::default()
        };
        let config = FormatConfig::from_display_config(&display);
        let text = DisplayText::compute(Some(&sample()), DisplayMode::DateTime, &config);
        assert_eq!(text.date, "%d %z");
        assert_eq!(text.time, "10:30:00");
    }

    #[test]
    fn test_time_mode_combined_text() {
        let text = DisplayText::compute(Some(&sample()), DisplayMode::Time, &FormatConfig::new());
        assert_eq!(text.combined, "10:30:00");
        // The combined placeholder is the date one in every mode
        let unset = DisplayText::compute(None, DisplayMode::Time, &FormatConfig::new());
        assert_eq!(unset.combined, "Tap here to select a date");
        assert_eq!(unset.time, "Tap here to select a time");
    }
}
