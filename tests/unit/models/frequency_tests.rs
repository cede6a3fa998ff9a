// Unit tests for the Frequency and TerminationMode lookup tables

use event_form_sync::models::recurrence::{Frequency, RecurrenceRecord, TerminationMode};
use test_case::test_case;

#[test_case("daily", Frequency::Daily, "days" ; "daily")]
#[test_case("weekly", Frequency::Weekly, "weeks" ; "weekly")]
#[test_case("monthly", Frequency::Monthly, "months" ; "monthly")]
#[test_case("yearly", Frequency::Yearly, "years" ; "yearly")]
fn test_frequency_tables(value: &str, expected: Frequency, plural: &str) {
    let freq = Frequency::from_value(value).expect("known frequency");
    assert_eq!(freq, expected);
    assert_eq!(freq.as_value(), value);
    assert_eq!(freq.plural(), plural);
}

#[test_case("never", TerminationMode::Never ; "never")]
#[test_case("after", TerminationMode::After ; "after")]
#[test_case("on", TerminationMode::On ; "on")]
fn test_termination_values(value: &str, expected: TerminationMode) {
    assert_eq!(TerminationMode::from_value(value), Some(expected));
    assert_eq!(expected.as_value(), value);
}

#[test_case("1", Some(1) ; "plain")]
#[test_case(" 12 ", Some(12) ; "padded")]
#[test_case("", None ; "blank")]
#[test_case("two", None ; "words")]
fn test_interval_parsing(raw: &str, expected: Option<u32>) {
    let record = RecurrenceRecord {
        interval: raw.to_string(),
        ..Default::default()
    };
    assert_eq!(record.interval_value(), expected);
}

#[test]
fn test_frequency_serializes_as_option_value() {
    let json = serde_json::to_string(&Frequency::Monthly).unwrap();
    assert_eq!(json, "\"monthly\"");
}
