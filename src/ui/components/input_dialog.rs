//! Centered input dialog for creating and editing tasks

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{DIALOG_TITLE_CREATE, DIALOG_TITLE_EDIT, GLYPH_CURSOR};

use super::super::app::{App, Mode};
use super::super::layout::LayoutManager;

/// Input dialog component
pub struct InputDialog;

impl InputDialog {
    /// Render the modal input box when in Create or Edit mode
    pub fn render(f: &mut Frame, app: &App) {
        let (title, buffer) = match app.mode() {
            Mode::Create { buffer } => (DIALOG_TITLE_CREATE, buffer),
            Mode::Edit { buffer, .. } => (DIALOG_TITLE_EDIT, buffer),
            Mode::Normal => return,
        };

        let area = LayoutManager::input_dialog_rect(f.area());
        f.render_widget(Clear, area);

        let input = Paragraph::new(format!("{buffer}{GLYPH_CURSOR}")).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(title)
                .title_bottom(" (Esc: back) "),
        );
        f.render_widget(input, area);
    }
}
