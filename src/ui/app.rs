//! Application state and the input state machine

use tokio::time::Instant;

use crate::constants::ERROR_DISPLAY_DWELL;
use crate::store::Item;

use super::actions::Action;

/// Interaction mode. Create and Edit carry their own payloads, so stale
/// edit state cannot outlive the mode it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Create { buffer: String },
    Edit { id: String, buffer: String },
}

struct ErrorState {
    message: String,
    expires_at: Instant,
}

/// All mutable UI state. Only the event loop touches this; background tasks
/// reach it exclusively through the notification channels.
pub struct App {
    pub should_quit: bool,
    items: Vec<Item>,
    selected: usize,
    mode: Mode,
    error: Option<ErrorState>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            items: Vec::new(),
            selected: 0,
            mode: Mode::Normal,
            error: None,
        }
    }

    /// Replace the visible snapshot wholesale. The selection is clamped
    /// downward so a shrinking list keeps tracking its last row; it is
    /// never moved upward.
    pub fn apply_snapshot(&mut self, items: Vec<Item>) {
        self.items = items;
        if !self.items.is_empty() && self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// The selected item, or `None` when the snapshot is empty
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Enter Create mode with an empty buffer
    pub fn start_create(&mut self) {
        self.mode = Mode::Create { buffer: String::new() };
    }

    /// Enter Edit mode seeded with the selected item's current title.
    /// Without a selection this is a no-op.
    pub fn start_edit(&mut self) {
        if let Some(item) = self.selected_item() {
            self.mode = Mode::Edit {
                id: item.id.clone(),
                buffer: item.title.clone(),
            };
        }
    }

    /// Discard the buffer and any remembered identifier
    pub fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn push_input(&mut self, c: char) {
        if let Mode::Create { buffer } | Mode::Edit { buffer, .. } = &mut self.mode {
            buffer.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        if let Mode::Create { buffer } | Mode::Edit { buffer, .. } = &mut self.mode {
            buffer.pop();
        }
    }

    /// Submit the edit buffer. Whitespace-only buffers are silently ignored
    /// and the mode stays unchanged; otherwise the matching store action is
    /// returned and the mode resets to Normal.
    pub fn submit_input(&mut self) -> Option<Action> {
        let action = match &self.mode {
            Mode::Normal => return None,
            Mode::Create { buffer } => {
                let title = buffer.trim();
                if title.is_empty() {
                    return None;
                }
                Action::CreateItem(Item::new(title))
            }
            Mode::Edit { id, buffer } => {
                let title = buffer.trim();
                if title.is_empty() {
                    return None;
                }
                Action::EditTitle {
                    id: id.clone(),
                    title: title.to_string(),
                }
            }
        };
        self.mode = Mode::Normal;
        Some(action)
    }

    /// Toggle-done action for the selected item. Local state stays
    /// untouched; the change becomes visible through the change feed.
    #[must_use]
    pub fn toggle_selected(&self) -> Option<Action> {
        self.selected_item().map(|item| Action::ToggleDone {
            id: item.id.clone(),
            done: !item.done,
        })
    }

    /// Soft-delete action for the selected item
    #[must_use]
    pub fn delete_selected(&self) -> Option<Action> {
        self.selected_item().map(|item| Action::SoftDelete { id: item.id.clone() })
    }

    /// Show a transient error and arm its expiry
    pub fn set_error(&mut self, message: String) {
        self.error = Some(ErrorState {
            message,
            expires_at: Instant::now() + ERROR_DISPLAY_DWELL,
        });
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.message.as_str())
    }

    /// Deadline for the error-expiry select arm, if an error is showing
    #[must_use]
    pub fn error_deadline(&self) -> Option<Instant> {
        self.error.as_ref().map(|error| error.expires_at)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
