use crate::models::recurrence::{RecurrenceRecord, TerminationMode};
use crate::utils::date::parse_form_date;

/// Build an RRULE string for a committed recurrence, e.g.
/// `FREQ=WEEKLY;INTERVAL=2;COUNT=8`.
///
/// Returns `None` when the frequency is not one the form offers. Termination
/// values that do not parse are left out, giving an open-ended rule.
pub fn to_rrule(record: &RecurrenceRecord) -> Option<String> {
    let frequency = record.frequency()?;
    let mut parts = vec![format!("FREQ={}", frequency.to_rrule_freq())];

    if let Some(interval) = record.interval_value() {
        if interval > 1 {
            parts.push(format!("INTERVAL={}", interval));
        }
    }

    match record.ends {
        TerminationMode::Never => {}
        TerminationMode::After => {
            if let Some(count) = record.occurrence_count() {
                parts.push(format!("COUNT={}", count));
            }
        }
        TerminationMode::On => {
            if let Some(until) = parse_form_date(&record.end_date) {
                parts.push(format!("UNTIL={}", until.format("%Y%m%d")));
            }
        }
    }

    Some(parts.join(";"))
}
