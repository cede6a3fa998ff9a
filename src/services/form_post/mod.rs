// Form post encoding
// The page leaves this crate only as ordinary form posts; these build the
// urlencoded bodies for the event form and the toolbar's delete form.

use crate::models::page::{DeleteForm, PrimaryForm};

/// Value a checked checkbox submits.
const CHECKED: &str = "y";

struct FormBody {
    pairs: Vec<(&'static str, String)>,
}

impl FormBody {
    fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn field(&mut self, name: &'static str, value: &str) -> &mut Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Unchecked boxes are not submitted at all.
    fn checkbox(&mut self, name: &'static str, checked: bool) -> &mut Self {
        if checked {
            self.pairs.push((name, CHECKED.to_string()));
        }
        self
    }

    fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Body of the event create/edit form.
pub fn encode(primary: &PrimaryForm) -> String {
    let recurrence = &primary.recurrence;
    let mut body = FormBody::new();
    body.field("title", &primary.title)
        .field("start_date", &primary.start_date)
        .field("start_time", &primary.start_time)
        .field("end_date", &primary.end_date)
        .field("end_time", &primary.end_time)
        .checkbox("is_recurring", primary.is_recurring)
        .field("frequency", &recurrence.frequency)
        .field("every", &recurrence.interval)
        .field("ends", recurrence.ends.as_value())
        .field("num_occurrences", &recurrence.occurrences)
        .field("recurrence_end_date", &recurrence.end_date)
        .field("recurrence_summary", &primary.summary)
        .checkbox("published", primary.published)
        .checkbox("update_following", primary.update_following)
        .checkbox("update_all", primary.update_all)
        .field("event_image", &primary.event_image);
    body.encode()
}

/// Body of the delete form.
pub fn encode_delete(delete: &DeleteForm) -> String {
    let mut body = FormBody::new();
    body.checkbox("delete_following", delete.delete_following)
        .checkbox("delete_all", delete.delete_all);
    body.encode()
}
