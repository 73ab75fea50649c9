//! Report update reducer
//!
//! A single pure function dispatches every tagged update variant. The
//! aggregate is taken by value, so fields an update does not name keep
//! their existing allocations; unrelated consumers can detect "no change"
//! by buffer identity instead of deep comparison.

use crate::core::treatments;
use crate::domain::catalog::TreatmentCatalog;
use crate::domain::report::ReportData;
use crate::domain::update::ReportUpdate;
use std::borrow::Cow;

/// Applies one update to the report aggregate
///
/// Overwrites exactly the slice the variant names and returns the updated
/// aggregate. Treatment variants delegate to the collection engine; their
/// no-op outcomes (absent method, unchanged area) leave the treatment
/// buffer untouched. Performs no value validation.
pub fn apply_update(
    catalog: &TreatmentCatalog,
    mut data: ReportData,
    update: ReportUpdate,
) -> ReportData {
    match update {
        ReportUpdate::Diagnosis(value) => data.diagnosis = value,
        ReportUpdate::History(value) => data.history = value,
        ReportUpdate::Examination(value) => data.examination = value,
        ReportUpdate::ReportDate(value) => data.report_date = value,
        ReportUpdate::OtherTreatment(value) => data.other_treatment = value,
        ReportUpdate::ToggleTreatment { method, selected } => {
            if let Cow::Owned(next) = treatments::toggle_method(
                &data.treatments,
                &method,
                selected,
                &catalog.area_placeholder,
            ) {
                data.treatments = next;
            }
        }
        ReportUpdate::TreatmentArea { method, area } => {
            if let Cow::Owned(next) = treatments::set_area(&data.treatments, &method, &area) {
                data.treatments = next;
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::TreatmentRecord;

    fn seeded_report() -> ReportData {
        ReportData {
            diagnosis: "Lateral ankle sprain".to_string(),
            history: "Inversion injury playing netball".to_string(),
            treatments: vec![TreatmentRecord::new("Massage", "calf")],
            other_treatment: "Ice applied".to_string(),
            ..ReportData::default()
        }
    }

    #[test]
    fn test_scalar_update_overwrites_only_named_field() {
        let catalog = TreatmentCatalog::default();
        let before = seeded_report();

        let after = apply_update(
            &catalog,
            before.clone(),
            ReportUpdate::Diagnosis("Grade II lateral ankle sprain".to_string()),
        );

        assert_eq!(after.diagnosis, "Grade II lateral ankle sprain");
        assert_eq!(after.history, before.history);
        assert_eq!(after.treatments, before.treatments);
        assert_eq!(after.other_treatment, before.other_treatment);
    }

    #[test]
    fn test_untouched_treatments_keep_their_buffer() {
        let catalog = TreatmentCatalog::default();
        let before = seeded_report();
        let buffer = before.treatments.as_ptr();

        let after = apply_update(
            &catalog,
            before,
            ReportUpdate::Diagnosis("Revised".to_string()),
        );

        assert_eq!(after.treatments.as_ptr(), buffer);
    }

    #[test]
    fn test_toggle_treatment_uses_catalog_placeholder() {
        let catalog = TreatmentCatalog::default();

        let after = apply_update(
            &catalog,
            ReportData::default(),
            ReportUpdate::ToggleTreatment {
                method: "Taping".to_string(),
                selected: true,
            },
        );

        assert_eq!(after.treatments.len(), 1);
        assert_eq!(after.treatments[0].area, catalog.area_placeholder);
    }

    #[test]
    fn test_treatment_noop_keeps_buffer() {
        let catalog = TreatmentCatalog::default();
        let before = seeded_report();
        let buffer = before.treatments.as_ptr();

        let after = apply_update(
            &catalog,
            before,
            ReportUpdate::TreatmentArea {
                method: "Cupping".to_string(),
                area: "calf".to_string(),
            },
        );

        assert_eq!(after.treatments.as_ptr(), buffer);
    }

    #[test]
    fn test_set_treatment_area_replaces_area() {
        let catalog = TreatmentCatalog::default();

        let after = apply_update(
            &catalog,
            seeded_report(),
            ReportUpdate::TreatmentArea {
                method: "Massage".to_string(),
                area: "achilles".to_string(),
            },
        );

        assert_eq!(after.treatments[0].area, "achilles");
    }
}
