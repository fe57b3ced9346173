//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the form, the log pane and a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect, log_height: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(log_height),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Stack fields of the given heights with one blank line between them
    #[must_use]
    pub fn form_layout(area: Rect, heights: &[u16]) -> Vec<Rect> {
        let mut constraints = Vec::with_capacity(heights.len() * 2 + 1);
        for height in heights {
            constraints.push(Constraint::Length(*height));
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        chunks.iter().step_by(2).take(heights.len()).copied().collect()
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
