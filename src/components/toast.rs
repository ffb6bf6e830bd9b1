use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::core::theme::{Theme, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn tone(&self) -> Tone {
        match self {
            ToastKind::Success => Tone::Green,
            ToastKind::Warning => Tone::Orange,
            ToastKind::Error => Tone::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Handle for raising transient notifications. Each toast dismisses itself
/// after `duration_ms` unless the user closes it first.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self { toasts: RwSignal::new(Vec::new()), duration_ms }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn show(&self, toast: Toast) {
        let id = toast.id.clone();
        tracing::debug!("toast [{}] {}: {}", toast.kind.as_str(), toast.title, toast.description);
        self.toasts.update(|toasts| toasts.push(toast));

        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(toaster.duration_ms).await;
            toaster.dismiss(&id);
        });
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(Toast::new(ToastKind::Success, title, description));
    }

    pub fn warning(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(Toast::new(ToastKind::Warning, title, description));
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(Toast::new(ToastKind::Error, title, description));
    }

    pub fn dismiss(&self, id: &str) {
        // the stack may already be gone when a timer fires after unmount
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

#[component]
pub fn ToastStack(toaster: Toaster, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id.clone()
                children=move |toast| view! { <ToastItem toast=toast toaster=toaster theme=theme /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toaster: Toaster, theme: Signal<Theme>) -> impl IntoView {
    let tone = toast.kind.tone();
    let id = toast.id;

    view! {
        <div class=format!("toast toast-{}", toast.kind.as_str()) style=move || theme.get().card_style(tone)>
            <div class="toast-body">
                <strong style=move || format!("color: {};", theme.get().accent(tone).heading)>
                    {toast.title}
                </strong>
                <p>{toast.description}</p>
            </div>
            <button class="toast-close" title="Dismiss" on:click=move |_| toaster.dismiss(&id)>
                "×"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_tones() {
        assert_eq!(ToastKind::Success.tone(), Tone::Green);
        assert_eq!(ToastKind::Warning.tone(), Tone::Orange);
        assert_eq!(ToastKind::Error.tone(), Tone::Red);
    }

    #[test]
    fn toasts_get_distinct_ids() {
        let a = Toast::new(ToastKind::Error, "WebSocket Error", "boom");
        let b = Toast::new(ToastKind::Error, "WebSocket Error", "boom");
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "WebSocket Error");
    }
}
