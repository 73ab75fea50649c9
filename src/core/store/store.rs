//! Canonical report store
//!
//! Single source of truth for the report aggregate during an editing
//! session. Every section of the UI submits updates here; the new state
//! flows back down through the accessors.

use crate::core::store::reducer::apply_update;
use crate::core::treatments::compute_preview;
use crate::domain::catalog::TreatmentCatalog;
use crate::domain::report::ReportData;
use crate::domain::update::ReportUpdate;
use std::sync::Arc;

/// Holds the canonical report data and applies tagged updates to it
///
/// A store apply is one indivisible state transition: the execution model
/// is single-threaded event dispatch, so a reader never observes a
/// partially merged aggregate. The revision counter increments once per
/// apply and gives cheap change detection to consumers that poll.
pub struct ReportStore {
    catalog: Arc<TreatmentCatalog>,
    data: ReportData,
    revision: u64,
}

impl ReportStore {
    /// Creates a store with default-empty report data
    pub fn new(catalog: Arc<TreatmentCatalog>) -> Self {
        Self::with_data(catalog, ReportData::default())
    }

    /// Creates a store seeded from an existing snapshot
    pub fn with_data(catalog: Arc<TreatmentCatalog>, data: ReportData) -> Self {
        Self {
            catalog,
            data,
            revision: 0,
        }
    }

    /// Current report data
    pub fn data(&self) -> &ReportData {
        &self.data
    }

    /// Number of updates applied since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The injected method catalog
    pub fn catalog(&self) -> &TreatmentCatalog {
        &self.catalog
    }

    /// Applies one update as a single observable transition
    pub fn apply(&mut self, update: ReportUpdate) {
        tracing::debug!(op = update.op_name(), revision = self.revision, "applying report update");
        self.data = apply_update(&self.catalog, std::mem::take(&mut self.data), update);
        self.revision += 1;
    }

    /// Derives the numbered treatment preview for the current data
    pub fn preview(&self) -> Vec<String> {
        compute_preview(
            &self.catalog,
            &self.data.treatments,
            &self.data.other_treatment,
        )
    }
}
