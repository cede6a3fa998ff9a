//! State of the event create/edit page.
//!
//! `PrimaryForm` holds the values that are posted to the server, `ModalForm`
//! the shadow copy edited inside the repeat dialog, and `PageChrome` the
//! purely visual bits (labels, link targets, visibility) the page toggles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::recurrence::RecurrenceRecord;

/// The main event form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryForm {
    pub title: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub is_recurring: bool,
    pub recurrence: RecurrenceRecord,
    /// Hidden `recurrence_summary` input
    pub summary: String,
    pub published: bool,
    pub update_following: bool,
    pub update_all: bool,
    pub event_image: String,
}

/// Flags carried by the separate delete form in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteForm {
    pub delete_following: bool,
    pub delete_all: bool,
}

/// The repeat dialog's copy of the recurrence fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalForm {
    pub recurrence: RecurrenceRecord,
    /// `m-starts`: read-only mirror of the event's start date
    pub starts: String,
    /// Earliest date the end-date picker offers
    pub end_date_min: Option<NaiveDate>,
    /// Live summary preview shown under the dialog fields
    pub preview: String,
}

/// Where the toolbar's delete link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeleteLink {
    /// Submits the delete form directly
    #[default]
    Direct,
    /// Opens the "this / following / all" dialog for a series
    SeriesModal,
}

impl DeleteLink {
    pub fn href(&self) -> &'static str {
        match self {
            Self::Direct => "#delete",
            Self::SeriesModal => "#show-modal:delete",
        }
    }
}

pub const REPEAT_LABEL_IDLE: &str = "Repeat...";
pub const REPEAT_LABEL_SET: &str = "Repeat:";
pub const EDIT_LINK_TEXT: &str = "Edit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChrome {
    pub repeat_label: String,
    pub edit_link_text: String,
    /// Visible summary text next to the repeat checkbox
    pub summary_text: String,
    pub summary_visible: bool,
    pub delete_link: DeleteLink,
    pub image_url: String,
    pub image_visible: bool,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            repeat_label: REPEAT_LABEL_IDLE.to_string(),
            edit_link_text: String::new(),
            summary_text: String::new(),
            summary_visible: false,
            delete_link: DeleteLink::Direct,
            image_url: String::new(),
            image_visible: false,
        }
    }
}

/// Everything the page scripts read and write, passed explicitly to handlers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventPage {
    pub primary: PrimaryForm,
    pub delete: DeleteForm,
    /// `Some` while the repeat dialog is open
    pub modal: Option<ModalForm>,
    pub chrome: PageChrome,
}

impl EventPage {
    /// Build the page around a server-rendered form.
    pub fn new(primary: PrimaryForm) -> Self {
        let mut chrome = PageChrome {
            summary_text: primary.summary.clone(),
            summary_visible: primary.is_recurring,
            ..Default::default()
        };

        if primary.is_recurring {
            chrome.repeat_label = REPEAT_LABEL_SET.to_string();
            chrome.edit_link_text = EDIT_LINK_TEXT.to_string();
            chrome.delete_link = DeleteLink::SeriesModal;
        }

        Self {
            primary,
            delete: DeleteForm::default(),
            modal: None,
            chrome,
        }
    }

    /// Attach the preview URL for an image the server already stored.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.chrome.image_url = url.into();
        self.chrome.image_visible =
            !self.primary.event_image.is_empty() && !self.chrome.image_url.is_empty();
        self
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }
}
