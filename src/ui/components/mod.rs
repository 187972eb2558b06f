//! Reusable UI components

pub mod error_bar;
pub mod input_dialog;
pub mod status_bar;
pub mod task_list;

pub use error_bar::ErrorBar;
pub use input_dialog::InputDialog;
pub use status_bar::StatusBar;
pub use task_list::TaskList;
