//! File logging setup
//!
//! The TUI owns the terminal, so log output goes to a file under the XDG
//! data directory instead of stderr.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;

/// Initialize the global logger. A no-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Info)
        .chain(
            fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
        )
        .apply()
        .context("Logger already initialized")?;

    Ok(())
}

/// Path of the log file under the XDG data directory
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("taskmesh").join("taskmesh.log"))
}
