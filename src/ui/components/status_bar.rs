//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::{INPUT_STATUS_HINTS, STATUS_HINTS};

use super::super::app::{App, Mode};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the one-line status/help bar
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let text = match app.mode() {
            Mode::Normal => STATUS_HINTS,
            Mode::Create { .. } | Mode::Edit { .. } => INPUT_STATUS_HINTS,
        };

        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
