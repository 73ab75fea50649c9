//! Result type alias for clinedit
//!
//! This module provides a convenient Result type alias that uses
//! ClinEditError as the error type.

use super::errors::ClinEditError;

/// Result type alias for clinedit operations
///
/// # Examples
///
/// ```
/// use clinedit::domain::result::Result;
/// use clinedit::domain::errors::ClinEditError;
///
/// fn load_snapshot() -> Result<String> {
///     Ok("{}".to_string())
/// }
///
/// fn reject() -> Result<()> {
///     Err(ClinEditError::Validation("empty catalog".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ClinEditError>;
