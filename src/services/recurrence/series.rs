// Series preview
// Expands a committed recurrence into the dates the server would create.

use chrono::{Duration, Months, NaiveDate};

use crate::models::recurrence::{Frequency, RecurrenceRecord, TerminationMode};
use crate::utils::date::parse_form_date;

/// Dates of the series starting at `start`, at most `limit` of them.
///
/// Mirrors how the server builds a series: a recurrence whose termination
/// field is missing (no count for `after`, no date for `on`) or whose
/// frequency is unknown produces only the first event.
pub fn occurrence_dates(record: &RecurrenceRecord, start: NaiveDate, limit: usize) -> Vec<NaiveDate> {
    if limit == 0 {
        return Vec::new();
    }

    let single = vec![start];
    let Some(frequency) = record.frequency() else {
        log::warn!("Unknown frequency '{}', no series", record.frequency);
        return single;
    };
    let interval = record.interval_value().unwrap_or(1).max(1);

    let (max_count, until) = match record.ends {
        TerminationMode::Never => (limit, None),
        TerminationMode::After => match record.occurrence_count() {
            Some(count) if count > 0 => ((count as usize).min(limit), None),
            _ => return single,
        },
        TerminationMode::On => match parse_form_date(&record.end_date) {
            Some(until) => (limit, Some(until)),
            None => return single,
        },
    };

    let mut dates = Vec::new();
    for step in 0..max_count {
        let Some(date) = nth_occurrence(start, frequency, interval, step as u32) else {
            break;
        };
        if let Some(until) = until {
            if date > until {
                break;
            }
        }
        dates.push(date);
    }

    if dates.is_empty() {
        dates.push(start);
    }
    dates
}

fn nth_occurrence(start: NaiveDate, frequency: Frequency, interval: u32, step: u32) -> Option<NaiveDate> {
    let units = interval.checked_mul(step)?;
    match frequency {
        Frequency::Daily => start.checked_add_signed(Duration::days(units as i64)),
        Frequency::Weekly => start.checked_add_signed(Duration::weeks(units as i64)),
        // Offsets are taken from the start date so the 31st clamps per month
        // instead of drifting.
        Frequency::Monthly => start.checked_add_months(Months::new(units)),
        Frequency::Yearly => start.checked_add_months(Months::new(units.checked_mul(12)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(frequency: &str, interval: &str, ends: TerminationMode, occurrences: &str, end_date: &str) -> RecurrenceRecord {
        RecurrenceRecord {
            frequency: frequency.to_string(),
            interval: interval.to_string(),
            ends,
            occurrences: occurrences.to_string(),
            end_date: end_date.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_after_count() {
        let r = record("weekly", "1", TerminationMode::After, "3", "");
        assert_eq!(
            occurrence_dates(&r, date(2025, 1, 1), 52),
            vec![date(2025, 1, 1), date(2025, 1, 8), date(2025, 1, 15)]
        );
    }

    #[test]
    fn test_every_two_weeks_until_inclusive() {
        let r = record("weekly", "2", TerminationMode::On, "", "1/29/2025");
        assert_eq!(
            occurrence_dates(&r, date(2025, 1, 1), 52),
            vec![date(2025, 1, 1), date(2025, 1, 15), date(2025, 1, 29)]
        );
    }

    #[test]
    fn test_never_is_capped_by_limit() {
        let r = record("daily", "1", TerminationMode::Never, "", "");
        assert_eq!(occurrence_dates(&r, date(2025, 1, 1), 4).len(), 4);
    }

    #[test]
    fn test_monthly_clamps_to_month_end() {
        let r = record("monthly", "1", TerminationMode::After, "3", "");
        assert_eq!(
            occurrence_dates(&r, date(2025, 1, 31), 52),
            vec![date(2025, 1, 31), date(2025, 2, 28), date(2025, 3, 31)]
        );
    }

    #[test]
    fn test_missing_termination_value_gives_single_event() {
        let start = date(2025, 1, 1);
        let no_count = record("weekly", "1", TerminationMode::After, "", "");
        assert_eq!(occurrence_dates(&no_count, start, 52), vec![start]);

        let no_date = record("weekly", "1", TerminationMode::On, "", "soon");
        assert_eq!(occurrence_dates(&no_date, start, 52), vec![start]);
    }

    #[test]
    fn test_unknown_frequency_gives_single_event() {
        let r = record("hourly", "1", TerminationMode::Never, "", "");
        assert_eq!(occurrence_dates(&r, date(2025, 1, 1), 52), vec![date(2025, 1, 1)]);
    }
}
