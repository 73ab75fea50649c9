//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ClinEditConfig;
use crate::domain::errors::ClinEditError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`ClinEditConfig`]
/// 4. Applies environment variable overrides (`CLINEDIT_*`)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is not set, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use clinedit::config::load_config;
///
/// let config = load_config("clinedit.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClinEditConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClinEditError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClinEditError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ClinEditConfig = toml::from_str(&contents)
        .map_err(|e| ClinEditError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ClinEditError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched so documented examples in the file do
/// not require the variables they mention.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env var pattern");
    let mut missing: Vec<String> = Vec::new();
    let mut result = String::with_capacity(input.len());

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
        } else {
            let replaced = re.replace_all(line, |caps: &regex::Captures| {
                match std::env::var(&caps[1]) {
                    Ok(value) => value,
                    Err(_) => {
                        missing.push(caps[1].to_string());
                        String::new()
                    }
                }
            });
            result.push_str(&replaced);
        }
        result.push('\n');
    }

    if !missing.is_empty() {
        missing.dedup();
        return Err(ClinEditError::Configuration(format!(
            "Missing environment variables: {}",
            missing.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `CLINEDIT_*` environment variable overrides
fn apply_env_overrides(config: &mut ClinEditConfig) -> Result<()> {
    if let Ok(level) = std::env::var("CLINEDIT_LOG_LEVEL") {
        config.application.log_level = level;
    }

    if let Ok(delay) = std::env::var("CLINEDIT_DEBOUNCE_MS") {
        config.editor.debounce_delay_ms = delay.parse().map_err(|_| {
            ClinEditError::Configuration(format!(
                "CLINEDIT_DEBOUNCE_MS must be an integer, got '{delay}'"
            ))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_var() {
        std::env::set_var("CLINEDIT_TEST_PLACEHOLDER", "[area]");
        let input = r#"area_placeholder = "${CLINEDIT_TEST_PLACEHOLDER}""#;
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains(r#"area_placeholder = "[area]""#));
        std::env::remove_var("CLINEDIT_TEST_PLACEHOLDER");
    }

    #[test]
    fn test_missing_var_is_an_error() {
        let input = "value = \"${CLINEDIT_TEST_DOES_NOT_EXIST}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err
            .to_string()
            .contains("CLINEDIT_TEST_DOES_NOT_EXIST"));
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let input = "# set via ${CLINEDIT_TEST_DOES_NOT_EXIST}\nvalue = 1";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${CLINEDIT_TEST_DOES_NOT_EXIST}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/clinedit.toml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
