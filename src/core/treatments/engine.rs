//! Treatment list operations
//!
//! Pure operations over the ordered treatment list. The list holds at most
//! one record per method; every operation resolves an absent method as a
//! no-op and signals "unchanged" by returning `Cow::Borrowed` of the input.

use crate::domain::report::TreatmentRecord;
use std::borrow::Cow;

/// Selects or deselects a treatment method
///
/// Selecting a method that is not yet listed appends a record whose area is
/// `area_placeholder`; selecting a method already listed leaves the list
/// unchanged, so repeated selection cannot duplicate a record or reset an
/// edited area. Deselecting removes the one record whose method matches.
///
/// Returns `Cow::Borrowed` when the list is unchanged.
///
/// # Examples
///
/// ```
/// use clinedit::core::treatments::toggle_method;
///
/// let list = toggle_method(&[], "Massage", true, "[treatment area]");
/// assert_eq!(list[0].method, "Massage");
/// assert_eq!(list[0].area, "[treatment area]");
/// ```
pub fn toggle_method<'a>(
    treatments: &'a [TreatmentRecord],
    method: &str,
    selected: bool,
    area_placeholder: &str,
) -> Cow<'a, [TreatmentRecord]> {
    let position = treatments.iter().position(|r| r.method == method);

    match (selected, position) {
        (true, Some(_)) | (false, None) => Cow::Borrowed(treatments),
        (true, None) => {
            let mut next = treatments.to_vec();
            next.push(TreatmentRecord::new(method, area_placeholder));
            Cow::Owned(next)
        }
        (false, Some(index)) => {
            let mut next = treatments.to_vec();
            next.remove(index);
            Cow::Owned(next)
        }
    }
}

/// Replaces the target area of the record matching `method`
///
/// Returns `Cow::Borrowed` when no record matches or the area already
/// equals `area`; never errors. The forgiving no-op keeps rapid edits safe
/// while the list is in a transiently inconsistent state.
pub fn set_area<'a>(
    treatments: &'a [TreatmentRecord],
    method: &str,
    area: &str,
) -> Cow<'a, [TreatmentRecord]> {
    match treatments.iter().position(|r| r.method == method) {
        Some(index) if treatments[index].area != area => {
            let mut next = treatments.to_vec();
            next[index].area = area.to_string();
            Cow::Owned(next)
        }
        _ => Cow::Borrowed(treatments),
    }
}
