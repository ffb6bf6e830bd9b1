use leptos::prelude::*;

use super::RichText;
use crate::core::theme::{Theme, Tone};
use crate::features::run_detail::services::{MessageCard, MessageSection, TextBody, ToolCallSummary};

#[component]
pub fn MessageCardView(card: MessageCard, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let tone = card.tone();

    view! {
        <div
            class=format!("message-card message-{}", card.kind.as_str())
            style=move || theme.get().card_style(tone)
        >
            {card
                .sections
                .into_iter()
                .map(|section| render_section(section, tone, theme))
                .collect_view()}
        </div>
    }
}

fn render_section(section: MessageSection, tone: Tone, theme: Signal<Theme>) -> AnyView {
    let heading_style = move || format!("color: {};", theme.get().accent(tone).heading);

    match section {
        MessageSection::Text { heading, model_name, body } => view! {
            <div class="message-text">
                <h4 style=heading_style>{heading}</h4>
                {model_name.map(|name| view! {
                    <span class="model-name" style=move || format!("color: {};", theme.get().muted_text())>
                        {name}
                    </span>
                })}
                <div class="message-body" style=move || theme.get().inset_style()>
                    {match body {
                        TextBody::Rich(blocks) => view! { <RichText blocks=blocks theme=theme /> }.into_any(),
                        TextBody::Plain(text) => view! { <p class="plain-text">{text}</p> }.into_any(),
                    }}
                </div>
            </div>
        }
        .into_any(),
        MessageSection::ToolCalls(calls) => view! {
            <div class="tool-calls">
                <h5 style=move || format!("color: {};", theme.get().accent(Tone::Blue).heading)>
                    "Calling Functions"
                </h5>
                {calls.into_iter().map(|call| render_tool_call(call, theme)).collect_view()}
            </div>
        }
        .into_any(),
        MessageSection::ToolOutput { name, lines } => view! {
            <div class="tool-output">
                <h4 style=heading_style>{name}</h4>
                <hr />
                {lines
                    .into_iter()
                    .map(|line| view! {
                        <code class="output-line" style=move || theme.get().inset_style()>{line}</code>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        MessageSection::ErrorDetail(detail) => view! {
            <pre class="error-detail" style=move || {
                format!("{} color: {};", theme.get().inset_style(), theme.get().accent(Tone::Red).emphasis)
            }>
                {detail}
            </pre>
        }
        .into_any(),
    }
}

fn render_tool_call(call: ToolCallSummary, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class="tool-call" style=move || {
            let theme = theme.get();
            format!("border: 1px solid {}; background: {};", theme.accent(Tone::Blue).border, theme.inset())
        }>
            <strong style=move || format!("color: {};", theme.get().accent(Tone::Blue).emphasis)>{call.name}</strong>
            <code class="tool-args">{call.args}</code>
        </div>
    }
}
