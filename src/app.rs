use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{ToastStack, Toaster};
use crate::core::config::AppConfig;
use crate::core::services::load_color_mode;
use crate::core::theme::Theme;
use crate::pages::{Dashboard, NotFound};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let theme = RwSignal::new(Theme::new(load_color_mode().unwrap_or_default()));
    let toaster = Toaster::new(config.toast_duration_ms);

    provide_context(config);
    provide_context(toaster);

    view! {
        <Router>
            <main class="app" style=move || theme.get().page_style()>
                <Routes fallback=move || view! { <NotFound theme=theme /> }>
                    <Route path=path!("/") view=move || view! { <Dashboard theme=theme /> } />
                    <Route path=path!("/:run_id") view=move || view! { <Dashboard theme=theme /> } />
                </Routes>
            </main>
            <ToastStack toaster=toaster theme=theme />
        </Router>
    }
}
