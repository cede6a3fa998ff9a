// Settings module
// Tunables for the event page, loaded from settings.toml

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{
    parse_clock_time, parse_form_date, try_format_date, try_format_time, FORM_DATE_FORMAT,
    FORM_TIME_FORMAT,
};

/// What committing the repeat dialog does to the inactive termination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationCommit {
    /// Blank whichever of count / end date is not selected.
    #[default]
    ClearInactive,
    /// Older page behaviour: "on" resets the count to 1, "never" leaves both
    /// fields as they were.
    Legacy,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid {field} '{value}': expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    #[error("Default end time {end} must come after start time {start}")]
    TimeOrder { start: String, end: String },

    #[error("Invalid {field} '{value}': not a usable chrono format")]
    InvalidFormat { field: &'static str, value: String },

    #[error("date_format '{value}' produces dates the form cannot read back")]
    UnreadableDateFormat { value: String },

    #[error("Series preview limit must be at least 1")]
    EmptySeriesPreview,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub date_format: String,
    pub time_format: String,
    pub default_start_time: String,
    pub default_end_time: String,
    /// Delay before the publish toggle re-submits the form
    pub publish_save_delay_ms: u64,
    pub termination_commit: TerminationCommit,
    pub series_preview_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: FORM_DATE_FORMAT.to_string(),
            time_format: FORM_TIME_FORMAT.to_string(),
            default_start_time: "19:00".to_string(),
            default_end_time: "20:00".to_string(),
            publish_save_delay_ms: 500,
            termination_commit: TerminationCommit::ClearInactive,
            series_preview_limit: 52,
        }
    }
}

impl Settings {
    pub fn default_start(&self) -> Result<NaiveTime, SettingsError> {
        parse_clock_time(&self.default_start_time).ok_or_else(|| SettingsError::InvalidTime {
            field: "default_start_time",
            value: self.default_start_time.clone(),
        })
    }

    pub fn default_end(&self) -> Result<NaiveTime, SettingsError> {
        parse_clock_time(&self.default_end_time).ok_or_else(|| SettingsError::InvalidTime {
            field: "default_end_time",
            value: self.default_end_time.clone(),
        })
    }

    /// Format a date field value with `date_format`.
    pub fn format_date(&self, date: NaiveDate) -> Result<String, SettingsError> {
        try_format_date(date, &self.date_format).ok_or_else(|| SettingsError::InvalidFormat {
            field: "date_format",
            value: self.date_format.clone(),
        })
    }

    /// Format a time field value with `time_format`.
    pub fn format_time(&self, time: NaiveTime) -> Result<String, SettingsError> {
        try_format_time(time, &self.time_format).ok_or_else(|| SettingsError::InvalidFormat {
            field: "time_format",
            value: self.time_format.clone(),
        })
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        // Dates written by the pickers are read back for summaries and
        // series previews, so the format must round-trip. 12/25 keeps day
        // and month distinguishable.
        if let Some(sample) = NaiveDate::from_ymd_opt(2024, 12, 25) {
            let formatted = self.format_date(sample)?;
            if parse_form_date(&formatted) != Some(sample) {
                return Err(SettingsError::UnreadableDateFormat {
                    value: self.date_format.clone(),
                });
            }
        }

        let start = self.default_start()?;
        self.format_time(start)?;
        let end = self.default_end()?;
        if end <= start {
            return Err(SettingsError::TimeOrder {
                start: self.default_start_time.clone(),
                end: self.default_end_time.clone(),
            });
        }

        if self.series_preview_limit == 0 {
            return Err(SettingsError::EmptySeriesPreview);
        }

        Ok(())
    }
}
