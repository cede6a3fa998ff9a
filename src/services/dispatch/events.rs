//! Typed UI events and the side effects handlers ask the page to perform.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::recurrence::TerminationMode;

/// One edit inside the repeat dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalField {
    Frequency(String),
    Interval(String),
    Occurrences(String),
    EndDate(String),
    Starts(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Save,
    /// Publish toggle; `currently_active` is the toggle state before the click
    TogglePublished { currently_active: bool },
    ToggleRecurring { checked: bool },
    ShowRepeatModal,
    /// Delete link on a recurring event
    ShowDeleteSeriesModal,
    CloseModal,
    FocusOccurrences,
    FocusEndDate,
    SelectEnds(TerminationMode),
    ModalFieldChanged(ModalField),
    SubmitRepeatModal,
    SaveFollowing,
    SaveAll,
    Delete,
    DeleteFollowing,
    DeleteAll,
    SetImage { filename: String, url: String },
    RemoveImage,
}

/// Work the adapter must do after a handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitEventForm,
    SubmitDeleteForm,
    /// Click save again once the delay has passed
    ClickSaveAfter(Duration),
    OpenRepeatModal,
    /// Open the "this / following / all" delete dialog
    OpenDeleteSeriesModal,
    CloseModal,
    /// Redraw the dialog's live summary
    PreviewChanged(String),
    /// Redraw the summary text on the event form
    SummaryChanged(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action '{action}' is missing '{field}'")]
    MissingField { action: String, field: &'static str },

    #[error("Action '{action}' has invalid {field}: {value}")]
    InvalidValue {
        action: String,
        field: &'static str,
        value: String,
    },
}

/// An action as it arrives from the page: the link target or input id that
/// fired, plus whatever values came with it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAction {
    pub action: String,
    #[serde(default)]
    pub payload: Value,
}

impl RawAction {
    pub fn new(action: impl Into<String>, payload: Value) -> Self {
        Self {
            action: action.into(),
            payload,
        }
    }

    fn str_field(&self, field: &'static str) -> Result<String, DispatchError> {
        match self.payload.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Null) | None => Err(DispatchError::MissingField {
                action: self.action.clone(),
                field,
            }),
            Some(other) => Err(DispatchError::InvalidValue {
                action: self.action.clone(),
                field,
                value: other.to_string(),
            }),
        }
    }

    fn bool_field(&self, field: &'static str) -> Result<bool, DispatchError> {
        match self.payload.get(field) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::Null) | None => Err(DispatchError::MissingField {
                action: self.action.clone(),
                field,
            }),
            Some(other) => Err(DispatchError::InvalidValue {
                action: self.action.clone(),
                field,
                value: other.to_string(),
            }),
        }
    }
}

impl UiEvent {
    /// Map an action name (`#save`, `m-ends`, `focus:m-num_occurrences`, ...)
    /// to a typed event.
    pub fn from_action(raw: &RawAction) -> Result<Self, DispatchError> {
        let name = raw.action.trim().trim_start_matches('#');
        let event = match name {
            "save" => UiEvent::Save,
            "toggle" => UiEvent::TogglePublished {
                currently_active: raw.bool_field("active")?,
            },
            "is_recurring" => UiEvent::ToggleRecurring {
                checked: raw.bool_field("checked")?,
            },
            "show-modal" => UiEvent::ShowRepeatModal,
            "show-modal:delete" => UiEvent::ShowDeleteSeriesModal,
            "close-modal" => UiEvent::CloseModal,
            "focus:m-num_occurrences" => UiEvent::FocusOccurrences,
            "focus:m-recurrence_end_date" => UiEvent::FocusEndDate,
            "m-ends" => {
                let value = raw.str_field("value")?;
                let mode = TerminationMode::from_value(&value).ok_or_else(|| {
                    DispatchError::InvalidValue {
                        action: raw.action.clone(),
                        field: "value",
                        value: value.clone(),
                    }
                })?;
                UiEvent::SelectEnds(mode)
            }
            "m-frequency" => UiEvent::ModalFieldChanged(ModalField::Frequency(raw.str_field("value")?)),
            "m-every" => UiEvent::ModalFieldChanged(ModalField::Interval(raw.str_field("value")?)),
            "m-num_occurrences" => {
                UiEvent::ModalFieldChanged(ModalField::Occurrences(raw.str_field("value")?))
            }
            "m-recurrence_end_date" => {
                UiEvent::ModalFieldChanged(ModalField::EndDate(raw.str_field("value")?))
            }
            "m-starts" => UiEvent::ModalFieldChanged(ModalField::Starts(raw.str_field("value")?)),
            "submit:m-repeat-form" => UiEvent::SubmitRepeatModal,
            "save-following" => UiEvent::SaveFollowing,
            "save-all" => UiEvent::SaveAll,
            "delete" => UiEvent::Delete,
            "delete-following" => UiEvent::DeleteFollowing,
            "delete-all" => UiEvent::DeleteAll,
            "set-image" => UiEvent::SetImage {
                filename: raw.str_field("filename")?,
                url: raw.str_field("url")?,
            },
            "remove-image" => UiEvent::RemoveImage,
            _ => return Err(DispatchError::UnknownAction(raw.action.clone())),
        };
        Ok(event)
    }
}

impl TryFrom<RawAction> for UiEvent {
    type Error = DispatchError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        UiEvent::from_action(&raw)
    }
}
