use leptos::prelude::*;

use crate::core::services::save_color_mode;
use crate::core::theme::{ColorMode, Theme};

#[component]
pub fn ThemeToggle(theme: RwSignal<Theme>) -> impl IntoView {
    let toggle = move |_| {
        let next = theme.get_untracked().mode.toggled();
        theme.set(Theme::new(next));
        save_color_mode(next);
    };

    view! {
        <button
            class="btn-secondary theme-toggle"
            title="Toggle colour mode"
            style=move || theme.get().inset_style()
            on:click=toggle
        >
            {move || match theme.get().mode {
                ColorMode::Light => "☾ Dark",
                ColorMode::Dark => "☀ Light",
            }}
        </button>
    }
}
