//! Preview command implementation
//!
//! Loads a report snapshot from disk and prints the derived treatment
//! preview, exercising the same store and derivation path the editor UI
//! uses.

use crate::config::load_config;
use crate::core::input::format_display_date;
use crate::core::store::ReportStore;
use crate::domain::report::ReportData;
use clap::Args;
use std::fs;
use std::sync::Arc;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Path to a report snapshot (JSON)
    #[arg(short, long)]
    pub report: String,
}

impl PreviewArgs {
    /// Execute the preview command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(report = %self.report, "Deriving treatment preview");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let contents = match fs::read_to_string(&self.report) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to read report snapshot: {}", self.report);
                println!("   Error: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        let data: ReportData = match serde_json::from_str(&contents) {
            Ok(d) => d,
            Err(e) => {
                println!("❌ Report snapshot is not valid JSON");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        let store = ReportStore::with_data(Arc::new(config.catalog), data);

        println!("📋 Report preview");
        if !store.data().report_date.is_empty() {
            println!("   Date: {}", format_display_date(&store.data().report_date));
        }
        if !store.data().diagnosis.is_empty() {
            println!("   Diagnosis: {}", store.data().diagnosis);
        }
        println!();

        let lines = store.preview();
        if lines.is_empty() {
            println!("(no treatments recorded)");
        } else {
            for line in &lines {
                println!("{line}");
            }
        }

        Ok(0)
    }
}
