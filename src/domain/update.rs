//! Tagged report update operations
//!
//! Edits travel through a closed set of update variants dispatched by the
//! store's reducer. Each variant names exactly the slice of
//! [`ReportData`](super::report::ReportData) it overwrites, so an update
//! that touches unknown fields is unrepresentable.

use serde::{Deserialize, Serialize};

/// One partial update against the report aggregate
///
/// Applying an update overwrites only the named slice and leaves every
/// other field untouched. The treatment variants carry method names rather
/// than list indices; operating on an absent method is a no-op, never a
/// fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum ReportUpdate {
    /// Replace the diagnosis text
    Diagnosis(String),

    /// Replace the clinical history text
    History(String),

    /// Replace the examination findings text
    Examination(String),

    /// Replace the report date string
    ReportDate(String),

    /// Replace the free-text other-treatment entry
    OtherTreatment(String),

    /// Select or deselect a treatment method
    ToggleTreatment {
        /// Catalog method name
        method: String,
        /// `true` selects (append once), `false` deselects (remove)
        selected: bool,
    },

    /// Replace the target area of the record matching `method`
    TreatmentArea {
        /// Catalog method name
        method: String,
        /// New area text
        area: String,
    },
}

impl ReportUpdate {
    /// Short operation name used in debug logs
    pub fn op_name(&self) -> &'static str {
        match self {
            ReportUpdate::Diagnosis(_) => "diagnosis",
            ReportUpdate::History(_) => "history",
            ReportUpdate::Examination(_) => "examination",
            ReportUpdate::ReportDate(_) => "report_date",
            ReportUpdate::OtherTreatment(_) => "other_treatment",
            ReportUpdate::ToggleTreatment { .. } => "toggle_treatment",
            ReportUpdate::TreatmentArea { .. } => "treatment_area",
        }
    }
}
