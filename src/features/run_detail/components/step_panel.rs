use leptos::prelude::*;

use super::MessageCardView;
use crate::core::models::Event;
use crate::core::theme::{Theme, Tone};
use crate::features::run_detail::services::{MessageCard, Step};

#[component]
pub fn StepPanel(index: usize, step: Step, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let title = format!("Step {} · {}", index + 1, step.title());

    view! {
        <section class="step-panel">
            <h3 class="step-title" style=move || format!("color: {};", theme.get().accent(Tone::Teal).heading)>
                {title}
            </h3>
            {step.events.into_iter().map(|event| render_event(event, theme)).collect_view()}
        </section>
    }
}

fn render_event(event: Event, theme: Signal<Theme>) -> impl IntoView {
    let producer = event.producer_key().to_string();
    let cards: Vec<MessageCard> = event
        .messages()
        .map(MessageCard::from_message)
        .filter(|card| !card.is_empty())
        .collect();

    view! {
        <div class="step-event" data-event-id=event.id.to_string()>
            <span class="event-producer" style=move || format!("color: {};", theme.get().muted_text())>
                {producer}
            </span>
            {cards.into_iter().map(|card| view! { <MessageCardView card=card theme=theme /> }).collect_view()}
        </div>
    }
}
