use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::config::AppConfig;
use crate::core::models::{Run, RunId};
use crate::core::services::get_run;
use crate::features::run_detail::services::{accept_detail, listed_summary};

pub struct RunDetailHook {
    pub selected: ReadSignal<Option<RunId>>,
    pub detail: ReadSignal<Option<Run>>,
    pub select: Callback<RunId>,
}

pub fn use_run_detail(config: AppConfig, runs: RwSignal<Vec<Run>>) -> RunDetailHook {
    let (selected, set_selected) = signal(None::<RunId>);
    let (detail, set_detail) = signal(None::<Run>);

    let select = Callback::new(move |run_id: RunId| {
        set_selected.set(Some(run_id.clone()));
        set_detail.set(runs.with_untracked(|runs| listed_summary(runs, &run_id)));

        let config = config.clone();
        spawn_local(async move {
            match get_run(&config, &run_id).await {
                Ok(run) => {
                    let current = selected.get_untracked();
                    match accept_detail(current.as_ref(), run) {
                        Some(run) => set_detail.set(Some(run)),
                        None => tracing::debug!("discarding detail for run {}, selection changed", run_id),
                    }
                }
                Err(e) => tracing::error!("failed to fetch run {}: {}", run_id, e),
            }
        });
    });

    RunDetailHook { selected, detail, select }
}
