//! Report domain model
//!
//! This module defines the canonical report aggregate edited during a
//! session, plus the treatment record type it collects.

use serde::{Deserialize, Serialize};

/// Canonical report data for one editing session
///
/// The aggregate is owned exclusively by the report store; all other
/// components receive a reference and submit changes through
/// [`ReportUpdate`](super::update::ReportUpdate) values, never by holding a
/// private copy.
///
/// A fresh session starts from `ReportData::default()` (all fields empty).
///
/// # Examples
///
/// ```
/// use clinedit::domain::ReportData;
///
/// let report = ReportData::default();
/// assert!(report.diagnosis.is_empty());
/// assert!(report.treatments.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Working diagnosis text
    #[serde(default)]
    pub diagnosis: String,

    /// Relevant clinical history
    #[serde(default)]
    pub history: String,

    /// Examination findings
    #[serde(default)]
    pub examination: String,

    /// Report date as entered (ISO-like string, formatted for display
    /// separately)
    #[serde(default)]
    pub report_date: String,

    /// Ordered treatment records; at most one record per method
    #[serde(default)]
    pub treatments: Vec<TreatmentRecord>,

    /// Free-text treatment entry appended after the structured records
    #[serde(default)]
    pub other_treatment: String,
}

/// One structured treatment entry: a catalog method applied to a body area
///
/// The list in [`ReportData::treatments`] holds at most one record per
/// `method`; selecting a method that is already present is an area edit,
/// not a second insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentRecord {
    /// Treatment method name from the configured catalog
    pub method: String,

    /// Free-text target area; starts as the catalog's area placeholder
    pub area: String,
}

impl TreatmentRecord {
    /// Creates a record for `method` targeting `area`
    pub fn new(method: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            area: area.into(),
        }
    }
}
