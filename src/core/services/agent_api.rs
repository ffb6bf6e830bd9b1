use serde::Deserialize;

use super::http::{get_json, post_json};
use crate::core::config::AppConfig;
use crate::core::error::ApiError;
use crate::core::models::{Run, RunId, RunsResponse};

/// Acknowledgement returned when a run is started.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerAck {
    #[serde(default)]
    pub message: Option<String>,
}

impl TriggerAck {
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Agent started".to_string())
    }
}

pub async fn list_runs(config: &AppConfig) -> Result<Vec<Run>, ApiError> {
    let response: RunsResponse = get_json(&config.endpoint("agent/runs")).await?;
    let runs = response.into_runs();
    tracing::debug!("loaded {} runs", runs.len());
    Ok(runs)
}

pub async fn get_run(config: &AppConfig, run_id: &RunId) -> Result<Run, ApiError> {
    let run: Run = get_json(&config.endpoint(&format!("agent/runs/{}", run_id))).await?;
    tracing::debug!("loaded run {} with {} events", run.id, run.events.len());
    Ok(run)
}

pub async fn trigger_run(config: &AppConfig) -> Result<TriggerAck, ApiError> {
    let ack: TriggerAck = post_json(&config.endpoint("agent/run")).await?;
    tracing::info!("agent run requested: {}", ack.display_message());
    Ok(ack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_falls_back_when_message_missing() {
        let ack: TriggerAck = serde_json::from_str(r#"{"message":"Agent started successfully"}"#).unwrap();
        assert_eq!(ack.display_message(), "Agent started successfully");
        let ack: TriggerAck = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.display_message(), "Agent started");
    }
}
