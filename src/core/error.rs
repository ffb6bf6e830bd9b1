use thiserror::Error;
use wasm_bindgen::JsValue;

pub const QUOTA_EXCEEDED_MESSAGE: &str = "Quota exceeded. Please wait before running the agent again.";
pub const RUN_FAILED_MESSAGE: &str = "Error running agent";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("request failed: {0}")]
    Network(String),

    #[error("quota exceeded{}", detail_suffix(.detail))]
    QuotaExceeded { detail: Option<String> },

    #[error("server responded with status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            429 => ApiError::QuotaExceeded { detail },
            _ => ApiError::Status { status, detail },
        }
    }

    pub fn network(err: JsValue) -> Self {
        ApiError::Network(format!("{:?}", err))
    }

    /// Text shown in the notification when starting a run fails.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::QuotaExceeded { .. } => QUOTA_EXCEEDED_MESSAGE.to_string(),
            _ => RUN_FAILED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PushError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("failed to open push channel: {0}")]
    Open(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!(": {}", detail),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_requests_is_quota_exceeded() {
        let err = ApiError::from_status(429, Some("daily limit reached".into()));
        assert_eq!(err, ApiError::QuotaExceeded { detail: Some("daily limit reached".into()) });
        assert_eq!(err.user_message(), QUOTA_EXCEEDED_MESSAGE);
        assert_eq!(err.to_string(), "quota exceeded: daily limit reached");
    }

    #[test]
    fn other_failures_use_generic_message() {
        let err = ApiError::from_status(400, None);
        assert_eq!(err.user_message(), RUN_FAILED_MESSAGE);
        assert_eq!(err.to_string(), "server responded with status 400");
        assert_eq!(ApiError::Decode("eof".into()).user_message(), RUN_FAILED_MESSAGE);
    }
}
