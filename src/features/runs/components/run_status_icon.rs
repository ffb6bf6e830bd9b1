use leptos::prelude::*;

use crate::core::models::RunStatus;
use crate::core::theme::{Theme, Tone};

#[component]
pub fn RunStatusIcon(status: RunStatus, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    match status {
        RunStatus::Running => view! {
            <span
                class="spinner"
                title="running"
                style=move || format!("border-top-color: {};", theme.get().accent(Tone::Blue).border)
            ></span>
        }
        .into_any(),
        RunStatus::Failed => view! {
            <span
                class="status-glyph"
                title="failed"
                style=move || format!("color: {};", theme.get().accent(Tone::Red).border)
            >
                "⊘"
            </span>
        }
        .into_any(),
        // anything not failed or running counts as done
        RunStatus::Completed | RunStatus::Unknown => view! {
            <span
                class="status-glyph"
                title=status.as_str()
                style=move || format!("color: {};", theme.get().accent(Tone::Green).border)
            >
                "✓"
            </span>
        }
        .into_any(),
    }
}
