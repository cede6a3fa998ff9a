// Event Form Sync
// Replays a recorded sequence of page actions and prints what the event form
// would post.

use anyhow::{bail, Context, Result};
use chrono::Local;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use event_form_sync::models::page::{EventPage, PrimaryForm};
use event_form_sync::services::dispatch::{Dispatcher, Effect, RawAction, UiEvent};
use event_form_sync::services::form_post;
use event_form_sync::services::pickers::apply_defaults;
use event_form_sync::services::recurrence::{occurrence_dates, to_rrule};
use event_form_sync::services::settings::SettingsService;
use event_form_sync::utils::date::{format_form_date, parse_form_date};

/// A replay file: the server-rendered form plus the actions to run on it.
#[derive(Debug, Deserialize)]
struct Replay {
    #[serde(default)]
    form: PrimaryForm,
    /// Preview URL for `form.event_image`, if the server stored one
    #[serde(default)]
    image_url: Option<String>,
    actions: Vec<RawAction>,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(replay_path) = args.next().map(PathBuf::from) else {
        bail!("usage: event-form-sync <replay.json> [settings.toml]");
    };

    let settings_service = match args.next() {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let settings = settings_service.get()?;
    log::info!("Using settings from {:?}", settings_service.path());

    let content = fs::read_to_string(&replay_path)
        .with_context(|| format!("Failed to read replay file {:?}", replay_path))?;
    let replay: Replay = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse replay file {:?}", replay_path))?;

    let mut form = replay.form;
    apply_defaults(&mut form, Local::now().date_naive(), &settings)?;

    let mut page = EventPage::new(form);
    if let Some(url) = replay.image_url {
        page = page.with_image_url(url);
    }
    let dispatcher = Dispatcher::new(&settings);

    for raw in replay.actions {
        let event = UiEvent::try_from(raw)?;
        for effect in dispatcher.dispatch(&mut page, event) {
            match effect {
                Effect::SubmitEventForm => println!("POST event: {}", form_post::encode(&page.primary)),
                Effect::SubmitDeleteForm => println!("POST delete: {}", form_post::encode_delete(&page.delete)),
                Effect::ClickSaveAfter(delay) => {
                    log::info!("Save scheduled in {}ms", delay.as_millis());
                    println!("POST event: {}", form_post::encode(&page.primary));
                }
                other => log::debug!("Effect: {:?}", other),
            }
        }
    }

    let primary = &page.primary;
    println!("Summary: {}", primary.summary);

    if primary.is_recurring {
        if let Some(rrule) = to_rrule(&primary.recurrence) {
            println!("RRULE: {}", rrule);
        }
        if let Some(start) = parse_form_date(&primary.start_date) {
            let dates = occurrence_dates(&primary.recurrence, start, settings.series_preview_limit);
            let dates: Vec<String> = dates.into_iter().map(format_form_date).collect();
            println!("Occurrences: {}", dates.join(", "));
        }
    }

    Ok(())
}
