//! Task list component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::constants::{EMPTY_LIST_HINT, GLYPH_DONE, GLYPH_PENDING, LIST_TITLE, SELECTION_MARKER};

use super::super::app::App;

/// Task list component
pub struct TaskList;

impl TaskList {
    /// Render the visible snapshot with the selected row highlighted
    pub fn render(f: &mut Frame, area: Rect, app: &App) {
        let rows: Vec<ListItem> = if app.items().is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                EMPTY_LIST_HINT,
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            app.items()
                .iter()
                .map(|item| {
                    let glyph = if item.done { GLYPH_DONE } else { GLYPH_PENDING };
                    let style = if item.done {
                        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{glyph} "), style),
                        Span::styled(item.title.clone(), style),
                    ]))
                })
                .collect()
        };

        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(LIST_TITLE)
                    .title_alignment(Alignment::Center),
            )
            .highlight_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .highlight_symbol(SELECTION_MARKER);

        let mut state = ListState::default();
        if !app.items().is_empty() {
            state.select(Some(app.selected_index()));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}
