//! Configuration schema types
//!
//! This module defines the configuration structure for clinedit. The
//! treatment catalog lives here as injected data: the editing core reads
//! it from configuration and embeds no method names of its own.

use crate::domain::catalog::TreatmentCatalog;
use serde::{Deserialize, Serialize};

/// Main clinedit configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinEditConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Editor behavior settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Treatment method catalog
    pub catalog: TreatmentCatalog,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClinEditConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.editor.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Editor behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Debounce delay for high-frequency field input, in milliseconds.
    /// Zero is allowed: delivery is still deferred, just without a wait.
    #[serde(default = "default_debounce_delay_ms")]
    pub debounce_delay_ms: u64,
}

impl EditorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.debounce_delay_ms > 10_000 {
            return Err(format!(
                "debounce_delay_ms must be at most 10000, got {}",
                self.debounce_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_delay_ms: default_debounce_delay_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation policy (daily or hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("local_path is required when local_enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_debounce_delay_ms() -> u64 {
    300
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
