// Date and time picker defaults
// A new event opens on today's date, 7:00pm to 8:00pm unless settings say
// otherwise. Fields the server already rendered are left alone.

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::page::PrimaryForm;
use crate::models::settings::Settings;

/// Fill blank date/time fields on the event form.
pub fn apply_defaults(primary: &mut PrimaryForm, today: NaiveDate, settings: &Settings) -> Result<()> {
    settings.validate()?;
    let start = settings.default_start()?;
    let end = settings.default_end()?;

    if primary.start_time.trim().is_empty() && primary.end_time.trim().is_empty() {
        primary.start_time = settings.format_time(start)?;
        primary.end_time = settings.format_time(end)?;
    }

    let today = settings.format_date(today)?;
    if primary.start_date.trim().is_empty() && primary.end_date.trim().is_empty() {
        primary.start_date = today.clone();
        primary.end_date = today;
    }

    Ok(())
}
