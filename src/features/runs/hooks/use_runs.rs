use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Toaster;
use crate::core::config::AppConfig;
use crate::core::models::Run;
use crate::core::services::{list_runs, trigger_run};
use crate::features::runs::services::StatusLog;

pub struct RunsHook {
    pub runs: RwSignal<Vec<Run>>,
    pub status_log: RwSignal<StatusLog>,
    pub triggering: ReadSignal<bool>,
    pub trigger: Box<dyn Fn() + 'static>,
}

pub fn use_runs(config: AppConfig, toaster: Toaster) -> RunsHook {
    let runs = RwSignal::new(Vec::<Run>::new());
    let status_log = RwSignal::new(StatusLog::new(config.status_log_capacity));
    let (triggering, set_triggering) = signal(false);

    // Load runs on mount
    {
        let config = config.clone();
        spawn_local(async move {
            match list_runs(&config).await {
                Ok(loaded) => runs.set(loaded),
                Err(e) => tracing::error!("failed to fetch agent runs: {}", e),
            }
        });
    }

    let trigger = Box::new(move || {
        if triggering.get_untracked() {
            return;
        }
        set_triggering.set(true);
        let config = config.clone();
        spawn_local(async move {
            match trigger_run(&config).await {
                Ok(ack) => toaster.success("Agent", ack.display_message()),
                Err(e) => {
                    tracing::error!("failed to start agent: {}", e);
                    toaster.error("Agent", e.user_message());
                }
            }
            set_triggering.set(false);
        });
    }) as Box<dyn Fn() + 'static>;

    RunsHook { runs, status_log, triggering, trigger }
}
