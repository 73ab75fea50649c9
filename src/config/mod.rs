//! Configuration management
//!
//! TOML configuration with `${VAR}` environment substitution and
//! `CLINEDIT_*` overrides. The `[catalog]` section carries the treatment
//! method catalog the editing core receives as injected data.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{ApplicationConfig, ClinEditConfig, EditorConfig, LoggingConfig};
