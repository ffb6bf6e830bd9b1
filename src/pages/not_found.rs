use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::theme::{Theme, Tone};

#[component]
pub fn NotFound(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <p class="not-found-code" style=move || format!("color: {};", theme.get().accent(Tone::Teal).heading)>
                "404"
            </p>
            <p>"Oops!"</p>
            <p>"Page not found."</p>
            <button class="btn-secondary" on:click=move |_| navigate("/", Default::default())>
                "Go back"
            </button>
        </div>
    }
}
