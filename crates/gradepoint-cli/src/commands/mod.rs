//! CLI command implementations.

pub mod init;
pub mod mapping;
pub mod session;

use std::path::PathBuf;

use anyhow::Result;
use gradepoint_core::config::{load_config, validate_config, SessionConfig};
use gradepoint_core::gradebook::GradeBook;

/// Build the starting gradebook from an optional config path.
pub(crate) fn gradebook_from(config: Option<PathBuf>) -> Result<GradeBook> {
    let config = match config {
        Some(path) => load_config(&path)?,
        None => SessionConfig::default(),
    };
    for warning in validate_config(&config) {
        tracing::warn!("{}", warning.message);
    }
    Ok(config.into_gradebook())
}
