//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::DIALOG_MAX_WIDTH;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the frame into list area, error line, and status line. Chrome
    /// lines use fixed-length constraints so the list region degrades to
    /// zero height instead of going negative on tiny terminals; the error
    /// line collapses to zero height when no error is showing.
    #[must_use]
    pub fn main_layout(area: Rect, error_visible: bool) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(u16::from(error_visible)),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }

    /// Centered input dialog rectangle: fixed line height, width capped with
    /// a margin on narrow terminals.
    #[must_use]
    pub fn input_dialog_rect(area: Rect) -> Rect {
        let width = area.width.saturating_sub(10).min(DIALOG_MAX_WIDTH);
        let height = 3u16.min(area.height);
        let x = area.width.saturating_sub(width) / 2;
        let y = area.height.saturating_sub(height) / 2;
        Rect::new(area.x + x, area.y + y, width, height)
    }
}
