//! Treatment preview derivation
//!
//! Derives the numbered, human-readable treatment summary shown beside the
//! form. Phrasing is driven entirely by the injected catalog.

use crate::domain::catalog::TreatmentCatalog;
use crate::domain::report::TreatmentRecord;

/// Derives the numbered preview lines for the current treatment list
///
/// Records render in list order, so numbering reflects the order the user
/// selected methods in. Exercise-style methods read
/// `"<area> <method lowercased>"`, the rest `"<method lowercased> to
/// <area>"`; each phrase gets a leading capital and a trailing period. A
/// non-empty `other_treatment` appends one final line with the raw text.
///
/// # Examples
///
/// ```
/// use clinedit::core::treatments::compute_preview;
/// use clinedit::domain::{TreatmentCatalog, TreatmentRecord};
///
/// let catalog = TreatmentCatalog::default();
/// let treatments = vec![TreatmentRecord::new("Massage", "lower back")];
/// let lines = compute_preview(&catalog, &treatments, "Ice applied");
/// assert_eq!(lines, vec!["1. Massage to lower back.", "2. Ice applied."]);
/// ```
pub fn compute_preview(
    catalog: &TreatmentCatalog,
    treatments: &[TreatmentRecord],
    other_treatment: &str,
) -> Vec<String> {
    let mut lines: Vec<String> = treatments
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let phrase = render_phrase(catalog, record);
            format!("{}. {}.", index + 1, capitalize_first(&phrase))
        })
        .collect();

    if !other_treatment.is_empty() {
        lines.push(format!("{}. {}.", treatments.len() + 1, other_treatment));
    }

    lines
}

fn render_phrase(catalog: &TreatmentCatalog, record: &TreatmentRecord) -> String {
    let method = record.method.to_lowercase();
    if catalog.is_exercise_style(&record.method) {
        format!("{} {}", record.area, method)
    } else {
        format!("{} to {}", method, record.area)
    }
}

/// Uppercases the first character of `phrase`, leaving the rest untouched
fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
