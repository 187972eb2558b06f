//! Taskmesh - a terminal task-list client over a replicated document store
//!
//! This library provides a full-screen terminal interface for a shared task
//! list. Items live in a document store reached through a narrow gateway
//! interface; the store owns persistence and replication, while this crate
//! owns the event loop that reconciles keystrokes, store-change snapshots,
//! and transient errors into a consistent rendered view.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`store`] - Store gateway, command templates, and the bundled local backend
//! * [`ui`] - Terminal user interface, state machine, and event loop
//! * [`logger`] - File logging setup

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for the bundled local store
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Document store gateway and the bundled local backend
pub mod store;

/// Terminal user interface components and the event loop
pub mod ui;
