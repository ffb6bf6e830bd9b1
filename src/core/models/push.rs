use serde_json::Value;

use super::run::Run;

/// Frame received on the push channel.
#[derive(Debug, Clone, PartialEq)]
pub enum PushMessage {
    /// `{"type": "new_run", "run": {...}}`
    NewRun(Run),
    /// Anything else the backend broadcasts while a run progresses.
    Status(Value),
}

impl PushMessage {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        // The connection manager sends already-encoded strings, which arrive double encoded
        let value = match value {
            Value::String(inner) => match serde_json::from_str::<Value>(&inner) {
                Ok(decoded @ Value::Object(_)) => decoded,
                _ => Value::String(inner),
            },
            other => other,
        };

        if value.get("type").and_then(Value::as_str) == Some("new_run") {
            if let Some(run) = value.get("run") {
                return serde_json::from_value(run.clone()).map(PushMessage::NewRun);
            }
        }
        Ok(PushMessage::Status(value))
    }

    /// Compact JSON line for the status feed.
    pub fn log_line(value: &Value) -> String {
        serde_json::to_string(value).unwrap_or_default()
    }
}
