use leptos::prelude::*;

use crate::core::theme::Theme;
use crate::features::run_detail::services::TextBlock;

#[component]
pub fn RichText(blocks: Vec<TextBlock>, #[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    blocks
        .into_iter()
        .map(|block| match block {
            TextBlock::Heading(text) => view! { <h5 class="rich-heading">{text}</h5> }.into_any(),
            TextBlock::Paragraph(text) => view! { <p class="rich-paragraph">{text}</p> }.into_any(),
            TextBlock::List(items) => view! {
                <ul class="rich-list">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            }
            .into_any(),
            TextBlock::Code { language, code } => view! {
                <pre class="rich-code" data-language=language style=move || theme.get().inset_style()>
                    <code>{code}</code>
                </pre>
            }
            .into_any(),
        })
        .collect_view()
}
