use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

use super::event::Event;
use super::id::RunId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
            RunStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Run {
    pub id: RunId,
    #[serde(default)]
    pub start_time: String,
    pub status: RunStatus,
    // List responses omit events; only the detail endpoint fills them in
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Run {
    pub fn display_start_time(&self) -> String {
        format_timestamp(&self.start_time)
    }
}

/// Body of the list endpoint. Older backends return a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RunsResponse {
    Page {
        data: Vec<Run>,
        #[serde(default)]
        #[allow(dead_code)]
        count: usize,
    },
    List(Vec<Run>),
}

impl RunsResponse {
    pub fn into_runs(self) -> Vec<Run> {
        match self {
            RunsResponse::Page { data, .. } => data,
            RunsResponse::List(runs) => runs,
        }
    }
}

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Python's isoformat() drops the offset for naive datetimes, so both shapes show up
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::MessageKind;
    use serde_json::json;

    #[test]
    fn decodes_list_page_without_events() {
        let body = json!({
            "data": [
                { "id": 3, "start_time": "2024-06-01T09:15:02.481516", "status": "running" },
                { "id": 2, "start_time": "2024-06-01T08:00:00", "status": "failed" }
            ],
            "count": 2
        });
        let runs = serde_json::from_value::<RunsResponse>(body).unwrap().into_runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].id.as_str(), "3");
        assert_eq!(runs[0].status, RunStatus::Running);
        assert!(runs[0].events.is_empty());
        assert_eq!(runs[1].status, RunStatus::Failed);
    }

    #[test]
    fn decodes_bare_array_response() {
        let body = json!([{ "id": "a1", "start_time": "", "status": "completed" }]);
        let runs = serde_json::from_value::<RunsResponse>(body).unwrap().into_runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].status, RunStatus::Completed);
    }

    #[test]
    fn run_with_unsupported_message_type_still_decodes() {
        let run: Run = serde_json::from_value(json!({
            "id": 9,
            "start_time": "2024-06-01T09:15:02",
            "status": "completed",
            "events": [
                {
                    "id": 1,
                    "event_data": {
                        "metric_analyser": {
                            "messages": [
                                { "type": "system", "content": "You are a monitoring agent." },
                                { "type": "ai", "content": "CPU usage is nominal." }
                            ]
                        }
                    }
                },
                { "id": 2, "event_data": { "diagnostic": { "messages": [{ "type": "AIMessageChunk" }] } } }
            ]
        }))
        .unwrap();

        assert_eq!(run.events.len(), 2);
        let kinds: Vec<_> = run.events.iter().flat_map(|e| e.messages()).map(|m| m.kind()).collect();
        assert_eq!(kinds, vec![MessageKind::Unsupported, MessageKind::Ai, MessageKind::Unsupported]);
    }

    #[test]
    fn unrecognised_status_is_unknown() {
        let run: Run =
            serde_json::from_value(json!({ "id": 1, "start_time": "x", "status": "killed" })).unwrap();
        assert_eq!(run.status, RunStatus::Unknown);
    }

    #[test]
    fn formats_naive_and_offset_timestamps() {
        assert_eq!(format_timestamp("2024-06-01T09:15:02.481516"), "2024-06-01 09:15:02");
        assert_eq!(format_timestamp("2024-06-01T09:15:02+02:00"), "2024-06-01 09:15:02");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
