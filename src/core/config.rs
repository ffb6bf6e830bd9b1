use serde::Deserialize;
use std::str::FromStr;

/// Runtime settings for the dashboard.
///
/// Defaults target the backend served from the same origin. A deployment can
/// ship JSON in the `agent-monitor-config` script element of `index.html`;
/// `AGENT_MONITOR_API_BASE`, `AGENT_MONITOR_PUSH_URL` and
/// `AGENT_MONITOR_LOG_LEVEL` set at compile time win over both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every REST call, absolute or origin-relative.
    pub api_base: String,
    /// Push channel endpoint: a path resolved against the page origin, or a full ws(s) URL.
    pub push_url: String,
    pub toast_duration_ms: u32,
    pub status_log_capacity: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/v1".to_string(),
            push_url: "/ws".to_string(),
            toast_duration_ms: 5000,
            status_log_capacity: 50,
            log_level: "info".to_string(),
        }
    }
}

pub const CONFIG_ELEMENT_ID: &str = "agent-monitor-config";

impl AppConfig {
    /// Reads the embedded page config and applies build-time overrides.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::load_with(embedded_config().as_deref())
    }

    pub fn load_with(embedded: Option<&str>) -> Result<Self, serde_json::Error> {
        let mut config = match embedded.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => Self::from_json(raw)?,
            None => Self::default(),
        };
        config.apply_overrides(
            option_env!("AGENT_MONITOR_API_BASE"),
            option_env!("AGENT_MONITOR_PUSH_URL"),
            option_env!("AGENT_MONITOR_LOG_LEVEL"),
        );
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn apply_overrides(&mut self, api_base: Option<&str>, push_url: Option<&str>, log_level: Option<&str>) {
        if let Some(api_base) = api_base.filter(|v| !v.trim().is_empty()) {
            self.api_base = api_base.trim().to_string();
        }
        if let Some(push_url) = push_url.filter(|v| !v.trim().is_empty()) {
            self.push_url = push_url.trim().to_string();
        }
        if let Some(level) = log_level.filter(|v| !v.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Absolute WebSocket URL for the push channel, given the page origin
    /// (e.g. `https://dashboard.local:8443`).
    pub fn resolve_push_url(&self, origin: &str) -> String {
        let push = self.push_url.trim();
        if push.starts_with("ws://") || push.starts_with("wss://") {
            return push.to_string();
        }
        if push.starts_with("http://") || push.starts_with("https://") {
            return http_to_ws(push);
        }
        format!(
            "{}/{}",
            http_to_ws(origin.trim_end_matches('/')),
            push.trim_start_matches('/')
        )
    }

    pub fn level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.trim()).unwrap_or(tracing::Level::INFO)
    }
}

fn embedded_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

fn http_to_ws(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = AppConfig { api_base: "http://api.local/api/v1/".into(), ..AppConfig::default() };
        assert_eq!(config.endpoint("/agent/runs"), "http://api.local/api/v1/agent/runs");
        assert_eq!(AppConfig::default().endpoint("agent/run"), "/api/v1/agent/run");
    }

    #[test]
    fn push_path_resolves_against_origin() {
        let config = AppConfig::default();
        assert_eq!(config.resolve_push_url("https://dash.example.com"), "wss://dash.example.com/ws");
        assert_eq!(config.resolve_push_url("http://localhost:5173/"), "ws://localhost:5173/ws");
    }

    #[test]
    fn absolute_push_urls_are_kept() {
        let config = AppConfig { push_url: "ws://backend:8000/ws".into(), ..AppConfig::default() };
        assert_eq!(config.resolve_push_url("https://ignored"), "ws://backend:8000/ws");

        let config = AppConfig { push_url: "https://backend/ws".into(), ..AppConfig::default() };
        assert_eq!(config.resolve_push_url("http://ignored"), "wss://backend/ws");
    }

    #[test]
    fn json_override_fills_missing_fields_with_defaults() {
        let config = AppConfig::from_json(r#"{ "api_base": "https://ops/api", "status_log_capacity": 10 }"#).unwrap();
        assert_eq!(config.api_base, "https://ops/api");
        assert_eq!(config.status_log_capacity, 10);
        assert_eq!(config.push_url, "/ws");
        assert_eq!(config.toast_duration_ms, 5000);
    }

    #[test]
    fn embedded_config_is_the_base() {
        let config = AppConfig::load_with(Some(r#"{ "push_url": "wss://push.ops/ws", "toast_duration_ms": 800 }"#)).unwrap();
        assert_eq!(config.push_url, "wss://push.ops/ws");
        assert_eq!(config.toast_duration_ms, 800);
        assert_eq!(config.status_log_capacity, 50);
    }

    #[test]
    fn missing_or_blank_embedded_config_uses_defaults() {
        assert_eq!(AppConfig::load_with(None).unwrap(), AppConfig::load_with(Some("  \n ")).unwrap());
        assert_eq!(AppConfig::load_with(Some("{}")).unwrap(), AppConfig::load_with(None).unwrap());
    }

    #[test]
    fn malformed_embedded_config_is_an_error() {
        assert!(AppConfig::load_with(Some("{ api_base: ")).is_err());
        assert!(AppConfig::load_with(Some(r#"{ "status_log_capacity": "many" }"#)).is_err());
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("  "), Some("wss://push/ws"), Some("debug"));
        assert_eq!(config.api_base, "/api/v1");
        assert_eq!(config.push_url, "wss://push/ws");
        assert_eq!(config.level(), tracing::Level::DEBUG);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig { log_level: "chatty".into(), ..AppConfig::default() };
        assert_eq!(config.level(), tracing::Level::INFO);
    }
}
