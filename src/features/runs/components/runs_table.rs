use leptos::prelude::*;

use super::RunStatusIcon;
use crate::core::models::{Run, RunId};
use crate::core::theme::Theme;
use crate::features::runs::services::is_selected_run;

#[component]
pub fn RunsTable(
    #[prop(into)] runs: Signal<Vec<Run>>,
    #[prop(into)] selected: Signal<Option<RunId>>,
    on_select: Callback<RunId>,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    view! {
        <table class="runs-table">
            <thead style=move || format!("color: {};", theme.get().muted_text())>
                <tr>
                    <th class="status-col">"Status"</th>
                    <th>"Start Time"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || runs.get()
                    key=|run| (run.id.clone(), run.status)
                    children=move |run| {
                        let id = run.id.clone();
                        let is_selected = {
                            let id = id.clone();
                            Memo::new(move |_| selected.with(|s| is_selected_run(s.as_ref(), &id)))
                        };
                        view! {
                            <tr
                                class="run-row clickable"
                                class:selected=move || is_selected.get()
                                style=move || if is_selected.get() { theme.get().inset_style() } else { String::new() }
                                on:click=move |_| on_select.run(id.clone())
                            >
                                <td class="status-col">
                                    <RunStatusIcon status=run.status theme=theme />
                                </td>
                                <td>{run.display_start_time()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
