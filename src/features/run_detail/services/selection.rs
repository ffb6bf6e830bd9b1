use crate::core::models::{Run, RunId};

/// Keeps a fetched detail only if its run is still the one on screen.
pub fn accept_detail(selected: Option<&RunId>, fetched: Run) -> Option<Run> {
    match selected {
        Some(id) if *id == fetched.id => Some(fetched),
        _ => None,
    }
}

/// Placeholder shown while the detail request is in flight: the summary row
/// already in the table, if the run is listed.
pub fn listed_summary(runs: &[Run], id: &RunId) -> Option<Run> {
    runs.iter().find(|run| run.id == *id).cloned()
}
