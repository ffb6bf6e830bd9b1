use serde::{Deserialize, Deserializer};

/// One LangChain message as serialised by the backend's event encoder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    Ai(AiMessage),
    Human(HumanMessage),
    Tool(ToolMessage),
    Error(ErrorMessage),
    /// Any other LangChain type (`system`, chunks, ...); decoded so the rest of the run still shows.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Ai,
    Human,
    Tool,
    Error,
    Unsupported,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Ai => "ai",
            MessageKind::Human => "human",
            MessageKind::Tool => "tool",
            MessageKind::Error => "error",
            MessageKind::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AiMessage {
    #[serde(default, deserialize_with = "content_text")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HumanMessage {
    #[serde(default, deserialize_with = "content_text")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ToolMessage {
    #[serde(default, deserialize_with = "content_text")]
    pub content: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tool_call_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ErrorMessage {
    #[serde(default, deserialize_with = "content_text")]
    pub content: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
    #[serde(default)]
    pub id: Option<String>,
}

impl ToolCall {
    pub fn args_json(&self) -> String {
        if self.args.is_null() {
            return "{}".to_string();
        }
        serde_json::to_string(&self.args).unwrap_or_default()
    }
}

impl ToolMessage {
    pub fn output_lines(&self) -> Vec<String> {
        self.content.split('\n').map(str::to_string).collect()
    }
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Ai(_) => MessageKind::Ai,
            Message::Human(_) => MessageKind::Human,
            Message::Tool(_) => MessageKind::Tool,
            Message::Error(_) => MessageKind::Error,
            Message::Unsupported => MessageKind::Unsupported,
        }
    }

    pub fn model_name(&self) -> Option<&str> {
        match self {
            Message::Ai(m) => m.response_metadata.model_name.as_deref(),
            Message::Human(m) => m.response_metadata.model_name.as_deref(),
            Message::Error(m) => m.response_metadata.model_name.as_deref(),
            Message::Tool(_) | Message::Unsupported => None,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// LangChain content is either a string or a list of content parts
fn content_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Content {
        Text(String),
        Parts(Vec<Part>),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Part {
        Text(String),
        Block {
            #[serde(default)]
            text: Option<String>,
        },
    }

    Ok(match Option::<Content>::deserialize(deserializer)? {
        None => String::new(),
        Some(Content::Text(text)) => text,
        Some(Content::Parts(parts)) => parts
            .into_iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text),
                Part::Block { text } => text,
            })
            .collect::<Vec<_>>()
            .join(""),
    })
}
