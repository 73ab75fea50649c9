//! Tab navigation coordination

pub mod coordinator;

pub use coordinator::{ClinicalTab, NavigationCoordinator, NavigationState, Section};
