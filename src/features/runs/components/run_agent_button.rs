use leptos::prelude::*;

use crate::core::theme::{Theme, Tone};

#[component]
pub fn RunAgentButton(
    #[prop(into)] busy: Signal<bool>,
    on_click: Box<dyn Fn() + 'static>,
    #[prop(into)] theme: Signal<Theme>,
) -> impl IntoView {
    view! {
        <button
            class="btn-primary run-agent-btn"
            disabled=move || busy.get()
            style=move || {
                let accent = theme.get().accent(Tone::Teal);
                format!("background: {}; border-color: {};", accent.border, accent.border)
            }
            on:click=move |_| on_click()
        >
            {move || if busy.get() { "Starting…" } else { "Run Agent" }}
        </button>
    }
}
