use super::rich_text::{parse_blocks, TextBlock};
use crate::core::models::{Message, MessageKind, ToolCall};
use crate::core::theme::Tone;

#[derive(Debug, Clone, PartialEq)]
pub enum TextBody {
    Rich(Vec<TextBlock>),
    Plain(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallSummary {
    pub name: String,
    pub args: String,
}

impl From<&ToolCall> for ToolCallSummary {
    fn from(call: &ToolCall) -> Self {
        Self { name: call.name.clone(), args: call.args_json() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageSection {
    Text {
        heading: &'static str,
        model_name: Option<String>,
        body: TextBody,
    },
    ToolCalls(Vec<ToolCallSummary>),
    ToolOutput { name: String, lines: Vec<String> },
    ErrorDetail(String),
}

/// What a message card shows, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCard {
    pub kind: MessageKind,
    pub sections: Vec<MessageSection>,
}

impl MessageCard {
    pub fn from_message(message: &Message) -> Self {
        let model_name = message.model_name().map(str::to_string);
        let mut sections = Vec::new();

        match message {
            Message::Ai(ai) => {
                if !ai.content.is_empty() {
                    sections.push(MessageSection::Text {
                        heading: "AI Message",
                        model_name,
                        body: TextBody::Rich(parse_blocks(&ai.content)),
                    });
                }
                if !ai.tool_calls.is_empty() {
                    sections.push(MessageSection::ToolCalls(
                        ai.tool_calls.iter().map(ToolCallSummary::from).collect(),
                    ));
                }
            }
            Message::Human(human) => {
                if !human.content.is_empty() {
                    sections.push(MessageSection::Text {
                        heading: "Human Message",
                        model_name,
                        body: TextBody::Plain(human.content.clone()),
                    });
                }
            }
            Message::Tool(tool) => {
                sections.push(MessageSection::ToolOutput {
                    name: tool.name.clone().unwrap_or_else(|| "tool".to_string()),
                    lines: tool.output_lines(),
                });
            }
            Message::Error(error) => {
                if !error.content.is_empty() {
                    sections.push(MessageSection::Text {
                        heading: "Error",
                        model_name,
                        body: TextBody::Plain(error.content.clone()),
                    });
                }
                if let Some(detail) = error.error.as_ref().filter(|d| !d.is_empty()) {
                    sections.push(MessageSection::ErrorDetail(detail.clone()));
                }
            }
            Message::Unsupported => {}
        }

        Self { kind: message.kind(), sections }
    }

    pub fn tone(&self) -> Tone {
        match self.kind {
            MessageKind::Ai | MessageKind::Human | MessageKind::Unsupported => Tone::Teal,
            MessageKind::Tool => Tone::Blue,
            MessageKind::Error => Tone::Red,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card(value: serde_json::Value) -> MessageCard {
        MessageCard::from_message(&serde_json::from_value(value).unwrap())
    }

    #[test]
    fn empty_ai_content_shows_only_tool_calls() {
        let card = card(json!({
            "type": "ai",
            "content": "",
            "tool_calls": [
                { "name": "prometheus_query", "args": { "query": "rate(http_requests_total[5m])" } },
                { "name": "kubectl_describe", "args": { "pod": "reviews-v1" } }
            ]
        }));

        assert_eq!(card.sections.len(), 1);
        let MessageSection::ToolCalls(calls) = &card.sections[0] else { panic!("expected tool calls") };
        assert_eq!(calls[0].name, "prometheus_query");
        assert_eq!(calls[1].args, r#"{"pod":"reviews-v1"}"#);
    }

    #[test]
    fn ai_text_comes_before_tool_calls() {
        let card = card(json!({
            "type": "ai",
            "content": "Checking the error rate.",
            "response_metadata": { "model_name": "gpt-4o" },
            "tool_calls": [{ "name": "prometheus_query", "args": {} }]
        }));

        assert_eq!(card.sections.len(), 2);
        assert_eq!(
            card.sections[0],
            MessageSection::Text {
                heading: "AI Message",
                model_name: Some("gpt-4o".into()),
                body: TextBody::Rich(vec![TextBlock::Paragraph("Checking the error rate.".into())]),
            }
        );
        assert!(matches!(card.sections[1], MessageSection::ToolCalls(_)));
        assert_eq!(card.tone(), Tone::Teal);
    }

    #[test]
    fn empty_human_message_renders_nothing() {
        let card = card(json!({ "type": "human", "content": "" }));
        assert!(card.is_empty());
    }

    #[test]
    fn human_message_is_plain_text() {
        let card = card(json!({ "type": "human", "content": "- not a list\nplain" }));
        assert_eq!(
            card.sections,
            vec![MessageSection::Text {
                heading: "Human Message",
                model_name: None,
                body: TextBody::Plain("- not a list\nplain".into()),
            }]
        );
    }

    #[test]
    fn tool_output_is_split_into_lines() {
        let card = card(json!({ "type": "tool", "name": "kubectl_logs", "content": "line one\nline two" }));
        assert_eq!(
            card.sections,
            vec![MessageSection::ToolOutput {
                name: "kubectl_logs".into(),
                lines: vec!["line one".into(), "line two".into()],
            }]
        );
        assert_eq!(card.tone(), Tone::Blue);
    }

    #[test]
    fn error_message_shows_content_and_detail() {
        let with_detail = card(json!({ "type": "error", "content": "Diagnostic failed", "error": "timeout after 30s" }));
        assert_eq!(with_detail.sections.len(), 2);
        assert_eq!(with_detail.sections[1], MessageSection::ErrorDetail("timeout after 30s".into()));
        assert_eq!(with_detail.tone(), Tone::Red);

        let empty = card(json!({ "type": "error", "content": "" }));
        assert!(empty.is_empty());
    }

    #[test]
    fn unsupported_message_renders_nothing() {
        let system = card(json!({ "type": "system", "content": "You are a monitoring agent." }));
        assert_eq!(system.kind, MessageKind::Unsupported);
        assert!(system.is_empty());
    }
}
