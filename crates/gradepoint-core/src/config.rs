//! Session configuration.
//!
//! Loads an optional `gradepoint.toml` that picks the starting grade mode and
//! overrides point values on the letter scale. The gradebook itself is never
//! persisted; config is read-only input for a fresh session.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::gradebook::GradeBook;
use crate::mapping::{GradeMapping, GRADE_LETTERS};
use crate::model::GradeMode;

/// Settings for a new interactive session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Starting grade mode.
    #[serde(default)]
    pub mode: GradeMode,
    /// Point-value overrides for the letter scale, keyed by label.
    #[serde(default)]
    pub scale: BTreeMap<String, f64>,
}

impl SessionConfig {
    /// Build the starting gradebook. Overrides for labels outside the fixed
    /// letter set are skipped with a warning; the session still starts.
    pub fn into_gradebook(self) -> GradeBook {
        let mut mapping = GradeMapping::default();
        for (letter, value) in &self.scale {
            if mapping.set(letter, *value).is_err() {
                tracing::warn!(letter, "ignoring scale override for unknown letter");
            }
        }
        GradeBook::with_settings(self.mode, mapping)
    }
}

/// Parse a config file into a `SessionConfig`.
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse_config_str(&content, path)
}

/// Parse a TOML string into a `SessionConfig` (useful for testing).
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<SessionConfig> {
    toml::from_str(content).with_context(|| format!("failed to parse TOML: {}", source_path.display()))
}

/// A warning from config validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The letter label (if applicable).
    pub letter: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a config for common issues.
pub fn validate_config(config: &SessionConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (letter, value) in &config.scale {
        if !GRADE_LETTERS.contains(&letter.as_str()) {
            warnings.push(ValidationWarning {
                letter: Some(letter.clone()),
                message: format!("label {letter:?} is not in the letter scale and will be ignored"),
            });
        }
        if *value < 0.0 {
            warnings.push(ValidationWarning {
                letter: Some(letter.clone()),
                message: format!("point value {value} is negative"),
            });
        } else if *value > 10.0 {
            warnings.push(ValidationWarning {
                letter: Some(letter.clone()),
                message: format!("point value {value} is above the 10-point scale"),
            });
        }
    }

    warnings
}
