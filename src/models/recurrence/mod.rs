// Recurrence module
// Field-level model of the recurrence section shared by the event form and
// the repeat dialog.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Repeat frequencies offered by the "Repeats" select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// The option value submitted with the form (`weekly`).
    pub fn as_value(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Unit name used in "Every 3 weeks".
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Daily => "days",
            Self::Weekly => "weeks",
            Self::Monthly => "months",
            Self::Yearly => "years",
        }
    }

    pub fn to_rrule_freq(&self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly]
    }
}

/// How a recurring series ends. Exactly one mode is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminationMode {
    #[default]
    Never,
    After,
    On,
}

impl TerminationMode {
    /// The radio button value (`never`, `after`, `on`).
    pub fn as_value(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::After => "after",
            Self::On => "on",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "never" => Some(Self::Never),
            "after" => Some(Self::After),
            "on" => Some(Self::On),
            _ => None,
        }
    }
}

/// The five recurrence fields as they sit in the form, plus the selected
/// termination radio. Values are kept as raw strings; malformed input is
/// tolerated and interpreted only where it is displayed or submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurrenceRecord {
    pub frequency: String,
    /// "Every N units"
    pub interval: String,
    pub ends: TerminationMode,
    pub occurrences: String,
    pub end_date: String,
}

impl RecurrenceRecord {
    pub fn frequency(&self) -> Option<Frequency> {
        Frequency::from_value(&self.frequency)
    }

    /// `true` when the interval field reads as the number one.
    pub fn is_single_interval(&self) -> bool {
        self.interval_value() == Some(1)
    }

    pub fn interval_value(&self) -> Option<u32> {
        self.interval.trim().parse::<u32>().ok()
    }

    pub fn occurrence_count(&self) -> Option<u32> {
        self.occurrences.trim().parse::<u32>().ok()
    }
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Full English weekday name, as used in recurrence summaries.
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_sunday() as usize]
}
