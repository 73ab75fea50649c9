//! Domain error types
//!
//! Editing operations themselves never fail: operating on an absent method
//! or key resolves as a no-op. Errors arise only at the boundary of the
//! core — configuration loading, snapshot I/O, serialization — and none of
//! them expose third-party types.

use thiserror::Error;

/// Main clinedit error type
#[derive(Debug, Error)]
pub enum ClinEditError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Report snapshot errors
    #[error("Report error: {0}")]
    Report(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ClinEditError {
    fn from(err: std::io::Error) -> Self {
        ClinEditError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClinEditError {
    fn from(err: serde_json::Error) -> Self {
        ClinEditError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ClinEditError {
    fn from(err: toml::de::Error) -> Self {
        ClinEditError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClinEditError::Configuration("missing catalog".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing catalog");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ClinEditError = io_err.into();
        assert!(matches!(err, ClinEditError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ClinEditError = json_err.into();
        assert!(matches!(err, ClinEditError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("a = b = c").unwrap_err();
        let err: ClinEditError = toml_err.into();
        assert!(matches!(err, ClinEditError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = ClinEditError::Validation("bad input".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
