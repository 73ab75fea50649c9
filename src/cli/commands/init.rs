//! Init command implementation

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinedit.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing clinedit configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Adjust the treatment catalog in {}", self.output);
                println!("  2. Validate configuration: clinedit validate-config");
                println!("  3. Derive a preview: clinedit preview --report report.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

/// Starter configuration with the stock physiotherapy catalog
fn starter_config() -> &'static str {
    r#"# ClinEdit Configuration File
# Report-state editing core for a structured clinical report editor

[application]
# trace, debug, info, warn, error
log_level = "info"

[editor]
# Delay before a field edit is applied to the report, in milliseconds
debounce_delay_ms = 300

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"

[catalog]
# Area text assigned to a freshly selected method until the user edits it
area_placeholder = "[treatment area]"

[[catalog.methods]]
name = "Massage"

[[catalog.methods]]
name = "Mobilisation"

[[catalog.methods]]
name = "Dry needling"

[[catalog.methods]]
name = "Electrotherapy"

[[catalog.methods]]
name = "Taping"

[[catalog.methods]]
name = "Strengthening exercise"
exercise_style = true

[[catalog.methods]]
name = "Stretching exercise"
exercise_style = true

[[catalog.methods]]
name = "Stabilisation exercise"
exercise_style = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ClinEditConfig;

    #[test]
    fn test_starter_config_parses_and_validates() {
        let config: ClinEditConfig = toml::from_str(starter_config()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.catalog.methods.len(), 8);
    }
}
