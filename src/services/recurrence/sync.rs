use crate::models::page::{ModalForm, PrimaryForm};
use crate::models::recurrence::TerminationMode;
use crate::models::settings::TerminationCommit;
use crate::utils::date::parse_form_date;

use super::summary::compute_summary;

/// Seed the repeat dialog from the event form.
///
/// Blank form fields stay blank in the dialog; the termination radio follows
/// the form's radio (`never` when nothing was rendered). The dialog's start
/// date mirrors the event start date, which also bounds the end-date picker.
pub fn copy_primary_to_modal(primary: &PrimaryForm) -> ModalForm {
    ModalForm {
        recurrence: primary.recurrence.clone(),
        starts: primary.start_date.clone(),
        end_date_min: parse_form_date(&primary.start_date),
        preview: primary.summary.clone(),
    }
}

/// Commit the repeat dialog back to the event form.
///
/// With [`TerminationCommit::ClearInactive`] the termination field that is
/// not selected is blanked (both of them for `never`). Returns the new
/// summary, which is also written to the form's hidden summary field.
pub fn copy_modal_to_primary(
    modal: &ModalForm,
    primary: &mut PrimaryForm,
    policy: TerminationCommit,
) -> String {
    let source = &modal.recurrence;
    let target = &mut primary.recurrence;

    target.frequency = source.frequency.clone();
    target.interval = source.interval.clone();
    target.ends = source.ends;

    match (policy, source.ends) {
        (_, TerminationMode::After) => {
            target.occurrences = source.occurrences.clone();
            target.end_date.clear();
        }
        (TerminationCommit::ClearInactive, TerminationMode::On) => {
            target.end_date = source.end_date.clone();
            target.occurrences.clear();
        }
        (TerminationCommit::ClearInactive, TerminationMode::Never) => {
            target.occurrences.clear();
            target.end_date.clear();
        }
        (TerminationCommit::Legacy, TerminationMode::On) => {
            target.end_date = source.end_date.clone();
            target.occurrences = "1".to_string();
        }
        // Legacy commits leave both fields untouched, so a stale count and
        // end date can be posted together.
        (TerminationCommit::Legacy, TerminationMode::Never) => {}
    }

    let summary = compute_summary(modal);
    primary.summary = summary.clone();
    log::info!("Committed recurrence: {}", summary);
    summary
}
