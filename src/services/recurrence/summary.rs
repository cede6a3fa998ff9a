use chrono::Datelike;

use crate::models::page::ModalForm;
use crate::models::recurrence::{weekday_name, Frequency, TerminationMode};
use crate::utils::date::parse_form_date;

/// Describe the dialog's recurrence in words, e.g.
/// `Every 3 days on Monday, until 12/25/2024`.
///
/// Pure: the same dialog values always give the same string. Blank or
/// malformed fields are rendered as-is rather than rejected. An unreadable
/// start date drops the weekday clause.
pub fn compute_summary(modal: &ModalForm) -> String {
    let record = &modal.recurrence;
    let mut summary = String::new();

    if record.is_single_interval() {
        summary.push_str(&record.frequency);
    } else {
        let unit = match Frequency::from_value(&record.frequency) {
            Some(freq) => freq.plural(),
            None => record.frequency.as_str(),
        };
        summary.push_str(&format!("Every {} {}", record.interval, unit));
    }

    match parse_form_date(&modal.starts) {
        Some(start) => {
            summary.push_str(" on ");
            summary.push_str(weekday_name(start.weekday()));
        }
        None => log::debug!("No weekday for summary, start date is '{}'", modal.starts),
    }

    match record.ends {
        TerminationMode::Never => {}
        TerminationMode::After => {
            summary.push_str(&format!(", for {} occurrences", record.occurrences));
        }
        TerminationMode::On => {
            summary.push_str(&format!(", until {}", record.end_date));
        }
    }

    summary
}
