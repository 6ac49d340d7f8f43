use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error::ApiError;
use crate::utils::logging::{body_preview, with_pretty_json_debug};

/// Message used when a JSON error body carries none of the recognized fields.
pub const UNKNOWN_JSON_ERROR: &str = "Unknown JSON error";

/// Recognized message fields of a JSON error body, in priority order.
const MESSAGE_FIELDS: [&str; 2] = ["errorMessage", "body"];

/// Turns a non-success response into `ApiError::Http`.
///
/// The backend reports failures two ways: structured JSON bodies from its response helper,
/// and `text/plain` bodies from the generic error helper. `Content-Type` decides which.
pub async fn classify_error_response(resp: reqwest::Response) -> ApiError {
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(error) => return ApiError::Network(error),
    };

    let message = error_message(content_type.as_deref(), &bytes);

    tracing::debug!(
        %status,
        content_type = content_type.as_deref().unwrap_or("<none>"),
        body = %body_preview(&bytes),
        message = %message,
        "Backend error classified"
    );

    ApiError::Http { status, message }
}

/// Human-readable message for an error body.
///
/// JSON content types yield the first recognized field or `UNKNOWN_JSON_ERROR`. Everything
/// else, including a JSON content type whose body fails to parse, is used verbatim.
pub fn error_message(content_type: Option<&str>, body: &[u8]) -> String {
    if content_type.is_some_and(|ct| ct.contains("application/json")) {
        match serde_json::from_slice::<Value>(body) {
            Ok(json) => {
                with_pretty_json_debug(&json, |pretty| {
                    tracing::debug!(body = %pretty, "Structured error body");
                });
                return json_message(&json);
            }
            Err(error) => {
                tracing::debug!(
                    %error,
                    body = %body_preview(body),
                    "Error body declared JSON but failed to parse; using raw text"
                );
            }
        }
    }

    String::from_utf8_lossy(body).into_owned()
}

fn json_message(json: &Value) -> String {
    MESSAGE_FIELDS
        .iter()
        .filter_map(|field| json.get(field))
        .find_map(field_text)
        .unwrap_or_else(|| UNKNOWN_JSON_ERROR.to_string())
}

/// Empty strings, zero, `false` and `null` count as absent.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
