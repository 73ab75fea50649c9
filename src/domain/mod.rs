//! Domain models and types for clinedit.
//!
//! The domain layer provides:
//! - **Report aggregate** ([`ReportData`], [`TreatmentRecord`])
//! - **Injected method catalog** ([`TreatmentCatalog`], [`MethodSpec`])
//! - **Tagged update operations** ([`ReportUpdate`])
//! - **Error types** ([`ClinEditError`]) and the [`Result`] alias
//!
//! Edits never mutate [`ReportData`] directly from the UI layer; they are
//! expressed as [`ReportUpdate`] values and dispatched through the store's
//! reducer, which keeps the set of representable partial updates closed.

pub mod catalog;
pub mod errors;
pub mod report;
pub mod result;
pub mod update;

// Re-export commonly used types for convenience
pub use catalog::{MethodSpec, TreatmentCatalog};
pub use errors::ClinEditError;
pub use report::{ReportData, TreatmentRecord};
pub use result::Result;
pub use update::ReportUpdate;
