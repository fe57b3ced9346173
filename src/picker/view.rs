//! The UI tree produced by one render of a field, and how it is drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

/// A tappable part of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Label and value of a date or time field
    Single,
    /// Date half of a datetime field
    Date,
    /// Time half of a datetime field
    Time,
}

/// Text with the style token chosen for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub style: Style,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A tappable region and what it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapRegion {
    pub region: Region,
    pub value: StyledText,
}

/// Mode-specific interaction surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldBody {
    /// One region showing label and combined text
    Single(TapRegion),
    /// Date and time regions side by side under the label
    Split { date: TapRegion, time: TapRegion },
}

/// Rendered field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub form_group_style: Style,
    pub container_style: Style,
    pub label: Option<StyledText>,
    pub body: FieldBody,
    pub help: Option<StyledText>,
    pub error: Option<StyledText>,
    /// False when the field is disabled and taps are inert
    pub interactive: bool,
    /// Feedback style of the focused region
    pub background: Option<Style>,
}

impl FieldView {
    /// Regions a host can tap, in focus order
    pub fn regions(&self) -> Vec<Region> {
        match &self.body {
            FieldBody::Single(region) => vec![region.region],
            FieldBody::Split { date, time } => vec![date.region, time.region],
        }
    }

    /// Lines needed to draw the field
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label.is_some());
        let help = u16::from(self.help.is_some());
        let error = u16::from(self.error.is_some());
        label + 1 + help + error
    }

    /// Value text shown for a region, if the field has it
    pub fn text_of(&self, region: Region) -> Option<&str> {
        match (&self.body, region) {
            (FieldBody::Single(single), Region::Single) => Some(single.value.text.as_str()),
            (FieldBody::Split { date, .. }, Region::Date) => Some(date.value.text.as_str()),
            (FieldBody::Split { time, .. }, Region::Time) => Some(time.value.text.as_str()),
            _ => None,
        }
    }

    fn focus_style(&self) -> Style {
        self.background
            .unwrap_or_else(|| Style::default().add_modifier(Modifier::REVERSED))
    }

    fn region_span<'a>(&self, tap: &'a TapRegion, focused: Option<Region>) -> Span<'a> {
        let mut style = tap.value.style;
        if self.interactive && focused == Some(tap.region) {
            style = style.patch(self.focus_style());
        }
        Span::styled(tap.value.text.as_str(), style)
    }
}

/// Focus input and hit areas output of drawing a [`FieldView`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViewState {
    pub focused: Option<Region>,
    /// Screen rectangles of the tappable regions from the last draw
    pub hit_areas: Vec<(Region, Rect)>,
}

impl FieldViewState {
    /// Region under a screen position
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        self.hit_areas
            .iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
            })
            .map(|(region, _)| *region)
    }
}

impl StatefulWidget for &FieldView {
    type State = FieldViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.hit_areas.clear();
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.form_group_style);

        let mut y = area.y;
        let bottom = area.y + area.height;
        let mut next_line = |height: u16| -> Option<Rect> {
            if y + height > bottom {
                return None;
            }
            let rect = Rect::new(area.x, y, area.width, height);
            y += height;
            Some(rect)
        };

        match &self.body {
            FieldBody::Single(single) => {
                let height = u16::from(self.label.is_some()) + 1;
                if let Some(rect) = next_line(height) {
                    let mut lines = Vec::new();
                    if let Some(label) = &self.label {
                        lines.push(Line::from(Span::styled(label.text.as_str(), label.style)));
                    }
                    lines.push(Line::from(self.region_span(single, state.focused)));
                    Paragraph::new(lines).render(rect, buf);
                    state.hit_areas.push((single.region, rect));
                }
            }
            FieldBody::Split { date, time } => {
                if let Some(label) = &self.label {
                    if let Some(rect) = next_line(1) {
                        buf.set_style(rect, self.container_style);
                        Paragraph::new(Line::from(Span::styled(label.text.as_str(), label.style)))
                            .render(rect, buf);
                    }
                }
                if let Some(rect) = next_line(1) {
                    buf.set_style(rect, self.container_style);
                    let date_width = u16::try_from(date.value.text.chars().count()).unwrap_or(u16::MAX);
                    let halves = Layout::default()
                        .direction(Direction::Horizontal)
                        .constraints([Constraint::Length(date_width), Constraint::Length(2), Constraint::Min(0)])
                        .split(rect);
                    Paragraph::new(Line::from(self.region_span(date, state.focused))).render(halves[0], buf);
                    Paragraph::new(Line::from(self.region_span(time, state.focused))).render(halves[2], buf);
                    state.hit_areas.push((date.region, halves[0]));
                    state.hit_areas.push((time.region, halves[2]));
                }
            }
        }

        for block in [&self.help, &self.error].into_iter().flatten() {
            if let Some(rect) = next_line(1) {
                Paragraph::new(Line::from(Span::styled(block.text.as_str(), block.style))).render(rect, buf);
            }
        }
    }
}
