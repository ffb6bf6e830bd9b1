use leptos::prelude::*;

use crate::components::Toaster;
use crate::core::config::AppConfig;
use crate::core::models::{PushMessage, Run, RunId};
use crate::core::services::{page_origin, PushChannel, PushSignal};
use crate::features::runs::services::{apply_push_message, StatusLog};

const CLOSED_DESCRIPTION: &str = "WebSocket connection was closed.";

/// Opens the push channel for the lifetime of the calling component.
/// Status frames go to `status_log`; a `new_run` frame is merged into `runs`
/// and handed to `on_new_run` so the caller can open it.
pub fn use_push_feed(
    config: &AppConfig,
    runs: RwSignal<Vec<Run>>,
    status_log: RwSignal<StatusLog>,
    toaster: Toaster,
    on_new_run: impl Fn(RunId) + 'static,
) {
    let channel = StoredValue::new_local(None::<PushChannel>);

    let url = match page_origin() {
        Ok(origin) => config.resolve_push_url(&origin),
        Err(e) => {
            tracing::error!("cannot resolve push channel url: {}", e);
            return;
        }
    };

    let handle_signal = move |signal: PushSignal| match signal {
        PushSignal::Opened => {}
        PushSignal::Message(message) => {
            let announces_run = matches!(message, PushMessage::NewRun(_));
            // update both untracked, then wake only the signal that changed
            let opened = runs
                .try_update_untracked(|runs| {
                    status_log.try_update_untracked(|log| apply_push_message(runs, log, message))
                })
                .flatten()
                .flatten();
            if announces_run {
                runs.notify();
            } else {
                status_log.notify();
            }
            if let Some(run_id) = opened {
                on_new_run(run_id);
            }
        }
        PushSignal::Error(message) => toaster.error("WebSocket Error", message),
        PushSignal::Closed => toaster.warning("WebSocket Closed", CLOSED_DESCRIPTION),
    };

    match PushChannel::connect(&url, handle_signal) {
        Ok(opened) => {
            tracing::info!("push channel connecting to {}", opened.url());
            channel.set_value(Some(opened));
        }
        Err(e) => {
            tracing::error!("{}", e);
            toaster.error("WebSocket Error", e.to_string());
        }
    }

    on_cleanup(move || {
        // dropping the handle detaches the handlers before closing, so no toast fires
        channel.try_update_value(|opened| opened.take());
    });
}
