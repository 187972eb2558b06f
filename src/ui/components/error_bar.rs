//! Transient error line component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::super::app::App;

/// Error line component
pub struct ErrorBar;

impl ErrorBar {
    /// Render the active error, if any. The area collapses to zero height
    /// when no error is showing.
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        if let Some(message) = app.error_message() {
            let error_bar = Paragraph::new(format!("Error: {message}")).style(Style::default().fg(Color::Red));
            f.render_widget(error_bar, area);
        }
    }
}
