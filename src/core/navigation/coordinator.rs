//! Tab navigation coordinator
//!
//! Tracks which top-level section and which clinical sub-tab are active,
//! and lets any component force the view onto a specific clinical sub-tab.
//! State snapshots are published over a `tokio::sync::watch` channel, so a
//! cross-section jump is observable only as one combined transition.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Top-level report sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Referral and patient reference details (the session's landing view)
    Reference,
    /// Patient demographics
    Patient,
    /// Clinical findings and treatment, split into sub-tabs
    Clinical,
}

/// Sub-tabs within the clinical section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalTab {
    /// Initial consultation
    Initial,
    /// Follow-up consultations
    FollowUp,
    /// Discharge summary
    Discharge,
}

/// Snapshot of the active section and clinical sub-tab
///
/// `active_clinical_tab` is retained while other sections are active so the
/// clinical section reopens where the user left it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Active top-level section
    pub active_section: Section,

    /// Active sub-tab within the clinical section
    pub active_clinical_tab: ClinicalTab,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: Section::Reference,
            active_clinical_tab: ClinicalTab::Initial,
        }
    }
}

/// Coordinates tab navigation for one editing session
///
/// Lives for the whole session. Mutations go through `&mut self`, so each
/// transition completes before any subscriber reads the published snapshot;
/// there is no intermediate state where the sub-tab has changed but the
/// section has not.
pub struct NavigationCoordinator {
    state: NavigationState,
    tx: watch::Sender<NavigationState>,
}

impl NavigationCoordinator {
    /// Creates a coordinator at the default landing state
    pub fn new() -> Self {
        let state = NavigationState::default();
        let (tx, _) = watch::channel(state);
        Self { state, tx }
    }

    /// Current navigation snapshot
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Subscribes to navigation snapshots
    ///
    /// Each published snapshot is a completed transition; the watch channel
    /// coalesces, so a slow subscriber only ever sees the latest state.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.tx.subscribe()
    }

    /// Activates a top-level section
    pub fn navigate_to_section(&mut self, section: Section) {
        self.state.active_section = section;
        self.publish();
    }

    /// Activates a clinical sub-tab without touching the section
    pub fn navigate_to_clinical_tab(&mut self, tab: ClinicalTab) {
        self.state.active_clinical_tab = tab;
        self.publish();
    }

    /// Forces the view onto a clinical sub-tab from anywhere
    ///
    /// Switches the section to clinical first when needed, then sets the
    /// sub-tab, and publishes the result as one snapshot. This is the entry
    /// point other components call when a field in one tab should draw
    /// attention to another.
    pub fn focus_clinical_tab(&mut self, tab: ClinicalTab) {
        if self.state.active_section != Section::Clinical {
            tracing::debug!(from = ?self.state.active_section, "switching section for clinical focus");
            self.state.active_section = Section::Clinical;
        }
        self.state.active_clinical_tab = tab;
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.state);
    }
}

impl Default for NavigationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_reference_initial() {
        let coordinator = NavigationCoordinator::new();
        assert_eq!(coordinator.state(), NavigationState::default());
        assert_eq!(coordinator.state().active_section, Section::Reference);
        assert_eq!(coordinator.state().active_clinical_tab, ClinicalTab::Initial);
    }

    #[test]
    fn test_navigate_to_section_leaves_tab_alone() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.navigate_to_clinical_tab(ClinicalTab::Discharge);
        coordinator.navigate_to_section(Section::Patient);

        let state = coordinator.state();
        assert_eq!(state.active_section, Section::Patient);
        assert_eq!(state.active_clinical_tab, ClinicalTab::Discharge);
    }

    #[test]
    fn test_navigate_to_clinical_tab_is_section_independent() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.navigate_to_clinical_tab(ClinicalTab::FollowUp);

        let state = coordinator.state();
        assert_eq!(state.active_section, Section::Reference);
        assert_eq!(state.active_clinical_tab, ClinicalTab::FollowUp);
    }

    #[test]
    fn test_focus_jumps_section_and_tab_together() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.focus_clinical_tab(ClinicalTab::FollowUp);

        assert_eq!(
            coordinator.state(),
            NavigationState {
                active_section: Section::Clinical,
                active_clinical_tab: ClinicalTab::FollowUp,
            }
        );
    }

    #[test]
    fn test_focus_within_clinical_only_changes_tab() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.navigate_to_section(Section::Clinical);
        coordinator.focus_clinical_tab(ClinicalTab::Discharge);

        let state = coordinator.state();
        assert_eq!(state.active_section, Section::Clinical);
        assert_eq!(state.active_clinical_tab, ClinicalTab::Discharge);
    }

    #[tokio::test]
    async fn test_subscriber_sees_focus_as_one_snapshot() {
        let mut coordinator = NavigationCoordinator::new();
        let mut rx = coordinator.subscribe();
        assert!(!rx.has_changed().unwrap());

        coordinator.focus_clinical_tab(ClinicalTab::FollowUp);

        // One pending change containing both field updates
        assert!(rx.has_changed().unwrap());
        let snapshot = *rx.borrow_and_update();
        assert_eq!(snapshot.active_section, Section::Clinical);
        assert_eq!(snapshot.active_clinical_tab, ClinicalTab::FollowUp);
        assert!(!rx.has_changed().unwrap());
    }
}
