use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::core::error::ApiError;

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let body = send("GET", url).await?;
    decode(&body)
}

pub async fn post_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let body = send("POST", url).await?;
    decode(&body)
}

async fn send(method: &str, url: &str) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method);
    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(ApiError::network)?;

    tracing::debug!("{} {}", method, url);
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = response.dyn_into().map_err(ApiError::network)?;

    let body = read_text(&response).await?;
    if !response.ok() {
        return Err(ApiError::from_status(response.status(), error_detail(&body)));
    }
    Ok(body)
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(ApiError::network)?;
    let text = JsFuture::from(promise).await.map_err(ApiError::network)?;
    text.dyn_into::<js_sys::JsString>()
        .map(String::from)
        .map_err(|value| ApiError::Decode(format!("response body is not text: {:?}", value)))
}

// Responses are parsed from text so ids decode the same way in the browser and in tests
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pulls a readable reason out of an error body. FastAPI answers with
/// `{"detail": "..."}` or, for validation errors, `{"detail": [{"msg": "..."}]}`.
pub fn error_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => match value.get("detail") {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        },
        Err(_) => Some(trimmed.chars().take(200).collect()),
    }
}
