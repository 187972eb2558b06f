//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

use tokio::time::Duration;

/// How long a transient error stays on screen before auto-clearing
pub const ERROR_DISPLAY_DWELL: Duration = Duration::from_secs(3);

/// Glyph shown for completed items
pub const GLYPH_DONE: &str = "✅";
/// Glyph shown for pending items
pub const GLYPH_PENDING: &str = "☐";
/// Cursor glyph appended to the edit buffer in the input dialog
pub const GLYPH_CURSOR: &str = "█";

/// Highlight marker for the selected row
pub const SELECTION_MARKER: &str = "❯❯ ";

/// List title with navigation hints
pub const LIST_TITLE: &str = " Tasks (j↓, k↑, ⏎ toggle done) ";
/// Placeholder row shown when the snapshot is empty
pub const EMPTY_LIST_HINT: &str = "No tasks yet. Press 'c' to create one!";

// Dialog titles
pub const DIALOG_TITLE_CREATE: &str = " New Task ";
pub const DIALOG_TITLE_EDIT: &str = " Edit Task ";

// Status line key hints
pub const STATUS_HINTS: &str = "c: create  e: edit  d: delete  s: sync  q: quit";
pub const INPUT_STATUS_HINTS: &str = "Enter: submit  Esc: cancel";

/// Message surfaced when sync toggling is requested from the bundled store
pub const SYNC_TOGGLE_UNSUPPORTED: &str = "Sync toggle not supported by this store";

/// Maximum width of the input dialog in columns
pub const DIALOG_MAX_WIDTH: u16 = 60;

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
