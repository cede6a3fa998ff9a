//! Single entry point for page events.
//!
//! Each [`UiEvent`] is routed to one handler that updates the [`EventPage`]
//! and returns the [`Effect`]s the surrounding adapter must carry out
//! (submitting a form, closing the dialog, redrawing a summary).

mod events;

pub use events::{DispatchError, Effect, ModalField, RawAction, UiEvent};

use std::time::Duration;

use crate::models::page::{
    DeleteLink, EventPage, ModalForm, EDIT_LINK_TEXT, REPEAT_LABEL_IDLE, REPEAT_LABEL_SET,
};
use crate::models::settings::{Settings, TerminationCommit};
use crate::services::recurrence::{
    compute_summary, copy_modal_to_primary, copy_primary_to_modal, TerminationTrigger,
};

pub struct Dispatcher {
    termination_commit: TerminationCommit,
    publish_save_delay: Duration,
}

impl Dispatcher {
    pub fn new(settings: &Settings) -> Self {
        Self {
            termination_commit: settings.termination_commit,
            publish_save_delay: Duration::from_millis(settings.publish_save_delay_ms),
        }
    }

    pub fn dispatch(&self, page: &mut EventPage, event: UiEvent) -> Vec<Effect> {
        log::debug!("Dispatching {:?}", event);
        match event {
            UiEvent::Save => vec![Effect::SubmitEventForm],
            UiEvent::TogglePublished { currently_active } => {
                self.toggle_published(page, currently_active)
            }
            UiEvent::ToggleRecurring { checked } => self.toggle_recurring(page, checked),
            UiEvent::ShowRepeatModal => self.show_repeat_modal(page),
            UiEvent::ShowDeleteSeriesModal => vec![Effect::OpenDeleteSeriesModal],
            UiEvent::CloseModal => {
                page.modal = None;
                vec![Effect::CloseModal]
            }
            UiEvent::FocusOccurrences => {
                self.move_termination(page, TerminationTrigger::FocusOccurrences)
            }
            UiEvent::FocusEndDate => self.move_termination(page, TerminationTrigger::FocusEndDate),
            UiEvent::SelectEnds(mode) => {
                self.move_termination(page, TerminationTrigger::Select(mode))
            }
            UiEvent::ModalFieldChanged(field) => self.change_modal_field(page, field),
            UiEvent::SubmitRepeatModal => self.submit_repeat_modal(page),
            UiEvent::SaveFollowing => {
                page.primary.update_following = true;
                self.dispatch(page, UiEvent::Save)
            }
            UiEvent::SaveAll => {
                page.primary.update_all = true;
                self.dispatch(page, UiEvent::Save)
            }
            UiEvent::Delete => vec![Effect::SubmitDeleteForm],
            UiEvent::DeleteFollowing => {
                page.delete.delete_following = true;
                self.dispatch(page, UiEvent::Delete)
            }
            UiEvent::DeleteAll => {
                page.delete.delete_all = true;
                self.dispatch(page, UiEvent::Delete)
            }
            UiEvent::SetImage { filename, url } => {
                page.modal = None;
                page.primary.event_image = filename;
                page.chrome.image_url = url;
                page.chrome.image_visible = true;
                vec![Effect::CloseModal]
            }
            UiEvent::RemoveImage => {
                page.primary.event_image.clear();
                page.chrome.image_url.clear();
                page.chrome.image_visible = false;
                Vec::new()
            }
        }
    }

    /// Run a batch of events in order, collecting every effect.
    pub fn dispatch_all<I>(&self, page: &mut EventPage, events: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = UiEvent>,
    {
        let mut effects = Vec::new();
        for event in events {
            effects.extend(self.dispatch(page, event));
        }
        effects
    }

    fn toggle_published(&self, page: &mut EventPage, currently_active: bool) -> Vec<Effect> {
        page.primary.published = !currently_active;
        vec![Effect::ClickSaveAfter(self.publish_save_delay)]
    }

    fn toggle_recurring(&self, page: &mut EventPage, checked: bool) -> Vec<Effect> {
        if !checked {
            page.primary.is_recurring = false;
            page.chrome.delete_link = DeleteLink::Direct;
            page.chrome.edit_link_text.clear();
            page.chrome.repeat_label = REPEAT_LABEL_IDLE.to_string();
            page.chrome.summary_visible = false;
            return Vec::new();
        }

        page.chrome.delete_link = DeleteLink::SeriesModal;
        page.chrome.summary_visible = true;

        if page.chrome.summary_text.is_empty() {
            // Nothing configured yet: the checkbox stays unchecked until the
            // dialog is submitted.
            let mut effects = vec![Effect::OpenRepeatModal];
            effects.extend(self.show_repeat_modal(page));
            return effects;
        }

        page.primary.is_recurring = true;
        page.chrome.repeat_label = REPEAT_LABEL_SET.to_string();
        page.chrome.edit_link_text = EDIT_LINK_TEXT.to_string();
        Vec::new()
    }

    fn show_repeat_modal(&self, page: &mut EventPage) -> Vec<Effect> {
        let mut modal = copy_primary_to_modal(&page.primary);
        modal.preview = compute_summary(&modal);
        let preview = modal.preview.clone();
        page.modal = Some(modal);
        vec![Effect::PreviewChanged(preview)]
    }

    fn move_termination(&self, page: &mut EventPage, trigger: TerminationTrigger) -> Vec<Effect> {
        let Some(modal) = page.modal.as_mut() else {
            log::debug!("Ignoring {:?}, repeat dialog is closed", trigger);
            return Vec::new();
        };
        modal.recurrence.ends = modal.recurrence.ends.transition(trigger);
        // Radio changes fire the dialog's change handler too.
        Self::refresh_preview(modal)
    }

    fn change_modal_field(&self, page: &mut EventPage, field: ModalField) -> Vec<Effect> {
        let Some(modal) = page.modal.as_mut() else {
            log::debug!("Ignoring {:?}, repeat dialog is closed", field);
            return Vec::new();
        };

        match field {
            ModalField::Frequency(value) => modal.recurrence.frequency = value,
            ModalField::Interval(value) => modal.recurrence.interval = value,
            ModalField::Occurrences(value) => modal.recurrence.occurrences = value,
            ModalField::EndDate(value) => modal.recurrence.end_date = value,
            ModalField::Starts(value) => modal.starts = value,
        }
        Self::refresh_preview(modal)
    }

    fn refresh_preview(modal: &mut ModalForm) -> Vec<Effect> {
        let preview = compute_summary(modal);
        if preview == modal.preview {
            return Vec::new();
        }
        modal.preview = preview.clone();
        vec![Effect::PreviewChanged(preview)]
    }

    fn submit_repeat_modal(&self, page: &mut EventPage) -> Vec<Effect> {
        let Some(modal) = page.modal.take() else {
            log::warn!("Repeat dialog submitted while closed");
            return Vec::new();
        };

        let summary = copy_modal_to_primary(&modal, &mut page.primary, self.termination_commit);
        page.chrome.summary_text = summary.clone();
        page.primary.is_recurring = true;
        page.chrome.repeat_label = REPEAT_LABEL_SET.to_string();
        page.chrome.edit_link_text = EDIT_LINK_TEXT.to_string();

        vec![Effect::SummaryChanged(summary), Effect::CloseModal]
    }
}
