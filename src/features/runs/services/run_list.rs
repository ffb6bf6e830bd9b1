use std::collections::VecDeque;

use crate::core::models::{PushMessage, Run, RunId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunUpsert {
    Inserted,
    Replaced,
}

/// Adds a pushed run to the list. A run that is already listed is updated
/// in place so the table never shows the same id twice; new runs go on top.
pub fn upsert_run(runs: &mut Vec<Run>, run: Run) -> RunUpsert {
    if let Some(existing) = runs.iter_mut().find(|r| r.id == run.id) {
        // keep events we already fetched if the notification carries none
        let events = if run.events.is_empty() {
            std::mem::take(&mut existing.events)
        } else {
            run.events
        };
        *existing = Run { events, ..run };
        RunUpsert::Replaced
    } else {
        runs.insert(0, run);
        RunUpsert::Inserted
    }
}

/// Folds one push frame into the dashboard state. Returns the run to open
/// when the frame announced a new run; status frames only extend the log.
pub fn apply_push_message(runs: &mut Vec<Run>, log: &mut StatusLog, message: PushMessage) -> Option<RunId> {
    match message {
        PushMessage::NewRun(run) => {
            let run_id = run.id.clone();
            if upsert_run(runs, run) == RunUpsert::Replaced {
                tracing::debug!("run {} was already listed, replaced in place", run_id);
            }
            Some(run_id)
        }
        PushMessage::Status(value) => {
            log.push(PushMessage::log_line(&value));
            None
        }
    }
}

pub fn is_selected_run(selected: Option<&RunId>, run_id: &RunId) -> bool {
    selected == Some(run_id)
}

/// Bounded log of status frames shown above the run table; oldest entries fall off first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl StatusLog {
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::new(), capacity: capacity.max(1) }
    }

    pub fn push(&mut self, line: String) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line);
    }

    pub fn entries(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RunStatus;
    use serde_json::json;

    fn run(id: u32, status: &str) -> Run {
        serde_json::from_value(json!({ "id": id, "start_time": "2024-06-01T10:00:00", "status": status })).unwrap()
    }

    fn new_run_frame(id: u32, status: &str) -> PushMessage {
        PushMessage::parse(&json!({ "type": "new_run", "run": { "id": id, "status": status } }).to_string()).unwrap()
    }

    #[test]
    fn new_run_is_inserted_on_top() {
        let mut runs = vec![run(1, "completed"), run(2, "failed")];
        assert_eq!(upsert_run(&mut runs, run(3, "running")), RunUpsert::Inserted);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].id.as_str(), "3");
    }

    #[test]
    fn repeated_notification_does_not_duplicate_row() {
        let mut runs = vec![run(1, "completed"), run(2, "running")];
        assert_eq!(upsert_run(&mut runs, run(2, "failed")), RunUpsert::Replaced);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs.iter().filter(|r| r.id.as_str() == "2").count(), 1);
        assert_eq!(runs[1].status, RunStatus::Failed);
    }

    #[test]
    fn replacement_keeps_fetched_events() {
        let detailed: Run = serde_json::from_value(json!({
            "id": 5,
            "start_time": "",
            "status": "running",
            "events": [{ "id": 1, "event_data": { "diagnostic": { "messages": [] } } }]
        }))
        .unwrap();
        let mut runs = vec![detailed];
        upsert_run(&mut runs, run(5, "completed"));
        assert_eq!(runs[0].events.len(), 1);
        assert_eq!(runs[0].status, RunStatus::Completed);
    }

    #[test]
    fn new_run_frame_opens_the_run() {
        let mut runs = vec![run(1, "completed")];
        let mut log = StatusLog::new(10);

        let opened = apply_push_message(&mut runs, &mut log, new_run_frame(2, "running"));

        assert_eq!(opened, Some(RunId::from("2")));
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].id.as_str(), "2");
        assert!(log.is_empty());
    }

    #[test]
    fn repeated_new_run_frame_opens_without_duplicating() {
        let mut runs = vec![run(1, "completed")];
        let mut log = StatusLog::new(10);

        apply_push_message(&mut runs, &mut log, new_run_frame(2, "running"));
        let opened = apply_push_message(&mut runs, &mut log, new_run_frame(2, "completed"));

        assert_eq!(opened, Some(RunId::from("2")));
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].status, RunStatus::Completed);
    }

    #[test]
    fn status_frame_goes_to_log_only() {
        let mut runs = vec![run(1, "running")];
        let mut log = StatusLog::new(10);

        let frame = PushMessage::parse(r#"{"node": "diagnostic", "status": "started"}"#).unwrap();
        let opened = apply_push_message(&mut runs, &mut log, frame);

        assert_eq!(opened, None);
        assert_eq!(runs.len(), 1);
        assert_eq!(
            log.entries().cloned().collect::<Vec<_>>(),
            vec![r#"{"node":"diagnostic","status":"started"}"#.to_string()]
        );
    }

    #[test]
    fn only_the_matching_row_is_selected() {
        let selected = RunId::from("4");
        assert!(is_selected_run(Some(&selected), &RunId::from("4")));
        assert!(!is_selected_run(Some(&selected), &RunId::from("5")));
        assert!(!is_selected_run(None, &RunId::from("4")));
    }

    #[test]
    fn status_log_drops_oldest_beyond_capacity() {
        let mut log = StatusLog::new(2);
        log.push("a".into());
        log.push("b".into());
        log.push("c".into());
        assert_eq!(log.entries().count(), 2);
        assert_eq!(log.entries().cloned().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn zero_capacity_still_keeps_latest_entry() {
        let mut log = StatusLog::new(0);
        assert!(log.is_empty());
        log.push("only".into());
        log.push("latest".into());
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["latest"]);
    }
}
