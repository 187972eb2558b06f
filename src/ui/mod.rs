//! UI module for taskmesh
//!
//! This module handles the application state machine, event handling, and
//! all rendering.

pub mod actions;
pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod renderer;

pub use actions::Action;
pub use app::{App, Mode};
pub use events::handle_event;
pub use layout::LayoutManager;
pub use renderer::run_app;
