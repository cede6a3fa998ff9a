// Test fixtures - reusable test data
// Provides consistent form and dialog values across all test files

#![allow(dead_code)]

use event_form_sync::models::page::{ModalForm, PrimaryForm};
use event_form_sync::models::recurrence::{RecurrenceRecord, TerminationMode};

/// Start dates with a known weekday, in form format
pub mod dates {
    /// Wednesday
    pub const JAN_1_2025: &str = "1/1/2025";
    /// Monday
    pub const DEC_2_2024: &str = "12/2/2024";
    /// Saturday (leap day)
    pub const FEB_29_2020: &str = "2/29/2020";
}

pub fn recurrence(frequency: &str, interval: &str, ends: TerminationMode) -> RecurrenceRecord {
    RecurrenceRecord {
        frequency: frequency.to_string(),
        interval: interval.to_string(),
        ends,
        occurrences: "5".to_string(),
        end_date: "12/25/2024".to_string(),
    }
}

pub fn dialog(record: RecurrenceRecord, starts: &str) -> ModalForm {
    ModalForm {
        recurrence: record,
        starts: starts.to_string(),
        ..Default::default()
    }
}

/// A new event as the server renders it: dates filled in, no recurrence yet.
pub fn new_event_form() -> PrimaryForm {
    PrimaryForm {
        title: "ADI Hack Night".to_string(),
        start_date: dates::JAN_1_2025.to_string(),
        start_time: "7:00pm".to_string(),
        end_date: dates::JAN_1_2025.to_string(),
        end_time: "8:00pm".to_string(),
        recurrence: RecurrenceRecord {
            frequency: "weekly".to_string(),
            interval: "1".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// An existing series: weekly, ending after 10 events.
pub fn existing_series_form() -> PrimaryForm {
    PrimaryForm {
        is_recurring: true,
        recurrence: RecurrenceRecord {
            frequency: "weekly".to_string(),
            interval: "1".to_string(),
            ends: TerminationMode::After,
            occurrences: "10".to_string(),
            end_date: String::new(),
        },
        summary: "weekly on Wednesday, for 10 occurrences".to_string(),
        published: true,
        ..new_event_form()
    }
}
