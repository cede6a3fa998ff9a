// Property-based tests for recurrence summaries and dialog sync
// Exercises compute_summary and the commit/reopen cycle with random inputs

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, NaiveDate};
use event_form_sync::models::page::PrimaryForm;
use event_form_sync::models::recurrence::{weekday_name, Frequency, RecurrenceRecord, TerminationMode};
use event_form_sync::models::settings::TerminationCommit;
use event_form_sync::services::recurrence::{
    compute_summary, copy_modal_to_primary, copy_primary_to_modal,
};
use event_form_sync::utils::date::format_form_date;
use proptest::prelude::*;

fn frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::all().to_vec())
}

fn termination() -> impl Strategy<Value = TerminationMode> {
    prop::sample::select(vec![
        TerminationMode::Never,
        TerminationMode::After,
        TerminationMode::On,
    ])
}

fn start_date() -> impl Strategy<Value = NaiveDate> {
    (2000..2040i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: intervals above one always read "Every N <unit>"
    #[test]
    fn prop_multi_interval_starts_with_every(
        freq in frequency(),
        interval in 2..=30u32,
        ends in termination(),
        start in start_date(),
    ) {
        let record = RecurrenceRecord {
            frequency: freq.as_value().to_string(),
            interval: interval.to_string(),
            ..fixtures::recurrence("", "", ends)
        };
        let summary = compute_summary(&fixtures::dialog(record, &format_form_date(start)));

        let prefix = format!("Every {} {}", interval, freq.plural());
        prop_assert!(summary.starts_with(&prefix));
    }

    /// Property: an interval of one reads as the bare frequency name
    #[test]
    fn prop_single_interval_starts_with_frequency(
        freq in frequency(),
        ends in termination(),
        start in start_date(),
    ) {
        let record = fixtures::recurrence(freq.as_value(), "1", ends);
        let summary = compute_summary(&fixtures::dialog(record, &format_form_date(start)));

        let prefix = format!("{} on {}", freq.as_value(), weekday_name(start.weekday()));
        prop_assert!(summary.starts_with(&prefix));
        prop_assert!(!summary.starts_with("Every"));
    }

    /// Property: at most one termination clause, matching the selected mode
    #[test]
    fn prop_termination_clause_matches_mode(
        freq in frequency(),
        interval in 1..=30u32,
        ends in termination(),
        start in start_date(),
    ) {
        let record = fixtures::recurrence(freq.as_value(), &interval.to_string(), ends);
        let summary = compute_summary(&fixtures::dialog(record, &format_form_date(start)));

        let has_count = summary.ends_with(", for 5 occurrences");
        let has_until = summary.ends_with(", until 12/25/2024");
        match ends {
            TerminationMode::Never => prop_assert!(!has_count && !has_until && !summary.contains(',')),
            TerminationMode::After => prop_assert!(has_count && !summary.contains("until")),
            TerminationMode::On => prop_assert!(has_until && !summary.contains("occurrences")),
        }
    }

    /// Property: commit then reopen keeps the dialog's fields, except the
    /// termination field that was not selected
    #[test]
    fn prop_commit_reopen_round_trip(
        freq in frequency(),
        interval in 1..=30u32,
        ends in termination(),
        count in 1..=100u32,
        end in start_date(),
        start in start_date(),
    ) {
        let record = RecurrenceRecord {
            frequency: freq.as_value().to_string(),
            interval: interval.to_string(),
            ends,
            occurrences: count.to_string(),
            end_date: format_form_date(end),
        };
        let starts = format_form_date(start);
        let dialog = fixtures::dialog(record.clone(), &starts);

        let mut primary = PrimaryForm { start_date: starts.clone(), ..Default::default() };
        copy_modal_to_primary(&dialog, &mut primary, TerminationCommit::ClearInactive);
        let reopened = copy_primary_to_modal(&primary);

        let mut expected = record;
        match ends {
            TerminationMode::Never => {
                expected.occurrences.clear();
                expected.end_date.clear();
            }
            TerminationMode::After => expected.end_date.clear(),
            TerminationMode::On => expected.occurrences.clear(),
        }
        prop_assert_eq!(reopened.recurrence, expected);
        prop_assert_eq!(reopened.starts, starts);
    }

    /// Property: recomputing with the same inputs gives the same string
    #[test]
    fn prop_summary_is_idempotent(
        frequency in "[a-z]{0,8}",
        interval in "[0-9]{0,3}",
        ends in termination(),
        starts in "[0-9/]{0,10}",
    ) {
        let record = fixtures::recurrence(&frequency, &interval, ends);
        let dialog = fixtures::dialog(record, &starts);
        prop_assert_eq!(compute_summary(&dialog), compute_summary(&dialog));
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_weekly_wednesday_five_occurrences() {
        let record = fixtures::recurrence("weekly", "1", TerminationMode::After);
        let dialog = fixtures::dialog(record, fixtures::dates::JAN_1_2025);
        assert_eq!(compute_summary(&dialog), "weekly on Wednesday, for 5 occurrences");
    }

    #[test]
    fn test_every_three_days_until_christmas() {
        let record = fixtures::recurrence("daily", "3", TerminationMode::On);
        let dialog = fixtures::dialog(record, fixtures::dates::DEC_2_2024);
        assert_eq!(compute_summary(&dialog), "Every 3 days on Monday, until 12/25/2024");
    }

    #[test]
    fn test_never_has_no_clause() {
        let record = fixtures::recurrence("weekly", "1", TerminationMode::Never);
        let dialog = fixtures::dialog(record, fixtures::dates::JAN_1_2025);
        assert_eq!(compute_summary(&dialog), "weekly on Wednesday");
    }

    #[test]
    fn test_leap_day_start() {
        let record = fixtures::recurrence("yearly", "4", TerminationMode::Never);
        let dialog = fixtures::dialog(record, fixtures::dates::FEB_29_2020);
        assert_eq!(compute_summary(&dialog), "Every 4 years on Saturday");
    }
}
