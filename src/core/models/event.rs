use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use super::id::EventId;
use super::message::Message;

/// Key the backend uses for events that are not attributed to an agent.
pub const UNKNOWN_PRODUCER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Producer key to payload, in the order the backend wrote them.
    #[serde(default, deserialize_with = "ordered_event_data")]
    pub event_data: Vec<(String, EventPayload)>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Event {
    // The backend writes exactly one producer per event
    pub fn producer_key(&self) -> &str {
        self.event_data
            .first()
            .map(|(key, _)| key.as_str())
            .unwrap_or(UNKNOWN_PRODUCER)
    }

    pub fn producer(&self) -> Producer {
        Producer::from_key(self.producer_key())
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.event_data.iter().flat_map(|(_, payload)| payload.messages.iter())
    }
}

fn ordered_event_data<'de, D>(deserializer: D) -> Result<Vec<(String, EventPayload)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EventDataVisitor;

    impl<'de> Visitor<'de> for EventDataVisitor {
        type Value = Vec<(String, EventPayload)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of producer keys to payloads")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(1));
            while let Some((key, payload)) = map.next_entry::<String, EventPayload>()? {
                entries.push((key, payload));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(EventDataVisitor)
}

/// Graph node that emitted an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Producer {
    MetricAnalyser,
    Diagnostic,
    Solution,
    IncidentReporter,
    /// Tool execution node; its events belong to whichever agent asked for the call.
    CallTool,
    Other(String),
}

impl Producer {
    /// Agents in the order the monitoring pipeline runs them.
    pub const PIPELINE: [Producer; 4] = [
        Producer::MetricAnalyser,
        Producer::Diagnostic,
        Producer::Solution,
        Producer::IncidentReporter,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "metric_analyser" => Producer::MetricAnalyser,
            "diagnostic" => Producer::Diagnostic,
            "solution" => Producer::Solution,
            "incident_reporter" => Producer::IncidentReporter,
            "call_tool" => Producer::CallTool,
            other => Producer::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Producer::MetricAnalyser => "metric_analyser",
            Producer::Diagnostic => "diagnostic",
            Producer::Solution => "solution",
            Producer::IncidentReporter => "incident_reporter",
            Producer::CallTool => "call_tool",
            Producer::Other(key) => key.as_str(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Producer::MetricAnalyser => "Metric Analysis",
            Producer::Diagnostic => "Diagnostic",
            Producer::Solution => "Solution",
            Producer::IncidentReporter => "Incident Report",
            Producer::CallTool => "Tool Calls",
            Producer::Other(key) => key.as_str(),
        }
    }

    pub fn is_tool_call(&self) -> bool {
        matches!(self, Producer::CallTool)
    }

    pub fn pipeline_position(&self) -> Option<usize> {
        Self::PIPELINE.iter().position(|stage| stage == self)
    }
}
