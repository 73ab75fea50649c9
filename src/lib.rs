// ClinEdit - Clinical Report Editing Core
// Copyright (c) 2025 ClinEdit Contributors
// Licensed under the MIT License

//! # ClinEdit - Clinical Report Editing Core
//!
//! ClinEdit is the report-state editing layer of a structured clinical
//! report editor: it holds canonical report data, applies tagged partial
//! updates, debounces high-frequency input, derives numbered treatment
//! preview text, and coordinates cross-section tab navigation.
//!
//! ## Architecture
//!
//! ClinEdit follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (store, treatments, navigation, input)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use clinedit::config::EditorConfig;
//! use clinedit::core::EditorSession;
//! use clinedit::domain::{ReportUpdate, TreatmentCatalog};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(TreatmentCatalog::default());
//! let mut session = EditorSession::new(catalog, &EditorConfig::default());
//!
//! session.apply(ReportUpdate::ToggleTreatment {
//!     method: "Massage".to_string(),
//!     selected: true,
//! });
//! session.apply(ReportUpdate::TreatmentArea {
//!     method: "Massage".to_string(),
//!     area: "lower back".to_string(),
//! });
//!
//! assert_eq!(session.preview(), vec!["1. Massage to lower back."]);
//! ```
//!
//! ## Update Model
//!
//! Edits travel as [`domain::ReportUpdate`] values through a single
//! reducer. Each variant names exactly the slice of the report it
//! overwrites; everything else keeps its existing allocation, so
//! consumers can detect "no change" cheaply. Operating on an absent
//! treatment method is always a no-op, never an error — the editing
//! surface stays forgiving during rapid, transiently inconsistent edits.
//!
//! ## Navigation
//!
//! [`core::navigation::NavigationCoordinator`] tracks the active section
//! and clinical sub-tab. `focus_clinical_tab` is the cross-cutting jump:
//! it switches the section first when needed and publishes the combined
//! result as one watch-channel snapshot, so downstream effects keyed on
//! section changes always observe a consistent pair.
//!
//! ## Debounced Input
//!
//! ```rust,no_run
//! use clinedit::core::input::{Debouncer, DEFAULT_DEBOUNCE};
//!
//! # async fn example() {
//! let mut field = Debouncer::new(|text: String| { /* apply update */ }, DEFAULT_DEBOUNCE);
//! field.call("M".to_string());
//! field.call("Ma".to_string()); // supersedes the first call
//! # }
//! ```
//!
//! ## Logging
//!
//! ClinEdit uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting editor session");
//! warn!(method = "Cupping", "method not in catalog");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
