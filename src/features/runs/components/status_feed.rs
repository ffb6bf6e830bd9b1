use leptos::prelude::*;

use crate::core::theme::Theme;
use crate::features::runs::services::StatusLog;

#[component]
pub fn StatusFeed(#[prop(into)] log: Signal<StatusLog>, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Show when=move || log.with(|log| !log.is_empty())>
            <div class="status-feed" style=move || theme.get().inset_style()>
                {move || {
                    log.with(|log| {
                        log.entries()
                            .map(|line| view! { <code class="status-line">{line.clone()}</code> })
                            .collect_view()
                    })
                }}
            </div>
        </Show>
    }
}
