//! Editor session facade
//!
//! One `EditorSession` per editing lifetime: it owns the report store and
//! the navigation coordinator, carries the configured editor settings, and
//! is the boundary the presentation layer talks to.

use crate::config::EditorConfig;
use crate::core::input::Debouncer;
use crate::core::navigation::{ClinicalTab, NavigationCoordinator, NavigationState};
use crate::core::store::ReportStore;
use crate::domain::catalog::TreatmentCatalog;
use crate::domain::report::ReportData;
use crate::domain::update::ReportUpdate;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// A single report editing session
///
/// Created once when editing starts and dropped when it ends; report data
/// lives exactly as long as the session. The session exposes the updated
/// aggregate and the derived read-only values (preview lines, navigation
/// snapshot) back to the UI layer.
pub struct EditorSession {
    id: Uuid,
    store: ReportStore,
    navigation: NavigationCoordinator,
    debounce_delay: Duration,
}

impl EditorSession {
    /// Starts a session with empty report data
    pub fn new(catalog: Arc<TreatmentCatalog>, editor: &EditorConfig) -> Self {
        Self::with_data(catalog, editor, ReportData::default())
    }

    /// Starts a session seeded from an existing snapshot
    pub fn with_data(
        catalog: Arc<TreatmentCatalog>,
        editor: &EditorConfig,
        data: ReportData,
    ) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session_id = %id, "starting editor session");
        Self {
            id,
            store: ReportStore::with_data(catalog, data),
            navigation: NavigationCoordinator::new(),
            debounce_delay: Duration::from_millis(editor.debounce_delay_ms),
        }
    }

    /// Session identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current report data
    pub fn data(&self) -> &ReportData {
        self.store.data()
    }

    /// The underlying report store
    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    /// Applies one report update
    pub fn apply(&mut self, update: ReportUpdate) {
        self.store.apply(update);
    }

    /// Derived treatment preview lines for the current data
    pub fn preview(&self) -> Vec<String> {
        self.store.preview()
    }

    /// Current navigation snapshot
    pub fn navigation(&self) -> NavigationState {
        self.navigation.state()
    }

    /// The navigation coordinator, for subscribing or direct navigation
    pub fn navigator(&mut self) -> &mut NavigationCoordinator {
        &mut self.navigation
    }

    /// Forces the view onto a clinical sub-tab (cross-section jump)
    pub fn focus_clinical_tab(&mut self, tab: ClinicalTab) {
        self.navigation.focus_clinical_tab(tab);
    }

    /// Builds a debouncer for one field, wired to the session's configured
    /// delay
    pub fn debouncer<T: Send + 'static>(
        &self,
        handler: impl Fn(T) + Send + Sync + 'static,
    ) -> Debouncer<T> {
        Debouncer::new(handler, self.debounce_delay)
    }
}
