use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{ThemeToggle, Toaster};
use crate::core::config::AppConfig;
use crate::core::models::RunId;
use crate::core::theme::Theme;
use crate::features::run_detail::{use_run_detail, RunDetailHook, RunStepper};
use crate::features::runs::{use_push_feed, use_runs, RunAgentButton, RunsHook, RunsTable, StatusFeed};

#[component]
pub fn Dashboard(theme: RwSignal<Theme>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let toaster = use_context::<Toaster>().unwrap_or_else(|| Toaster::new(config.toast_duration_ms));

    let RunsHook { runs, status_log, triggering, trigger } = use_runs(config.clone(), toaster);
    let RunDetailHook { selected, detail, select } = use_run_detail(config.clone(), runs);

    use_push_feed(&config, runs, status_log, toaster, move |run_id| select.run(run_id));

    // Deep link: /:run_id opens that run once on load
    let deep_link = use_params_map().with_untracked(|params| params.get("run_id"));
    if let Some(run_id) = deep_link.filter(|id| !id.is_empty()) {
        select.run(RunId::from(run_id));
    }

    let detail_view = move || {
        if let Some(run) = detail.get() {
            view! { <RunStepper run=run theme=theme /> }.into_any()
        } else if runs.with(Vec::is_empty) {
            view! { <p class="empty-state">"No runs yet. Press Run Agent to start one."</p> }.into_any()
        } else {
            view! { <p class="empty-state">"Select a run on the left to inspect it"</p> }.into_any()
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Agent Runs"</h1>
                <div class="dashboard-actions">
                    <ThemeToggle theme=theme />
                    <RunAgentButton busy=triggering on_click=trigger theme=theme />
                </div>
            </header>
            <StatusFeed log=status_log theme=theme />
            <div class="dashboard-grid">
                <div class="runs-column">
                    <RunsTable runs=runs selected=selected on_select=select theme=theme />
                </div>
                <div class="detail-column">{detail_view}</div>
            </div>
        </div>
    }
}
