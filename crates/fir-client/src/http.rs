//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and body decoding so resource modules stay
//! focused on request construction. Error bodies of the form
//! `{"error": "..."}` become [`ApiError::Api`] with that message; anything
//! else falls back to `HTTP error! status: N`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: error_message(status.as_u16(), &body),
    })
}

/// Decode a successful response body as JSON.
///
/// An empty body decodes as JSON `null`, so endpoints that answer `204` can
/// be read as `serde_json::Value` or `Option<T>`.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let url = resp.url().path().to_string();
    let body = resp.text().await?;
    decode_body(&url, &body)
}

pub(crate) fn decode_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
}

fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|value| match value {
            serde_json::Value::String(s) if !s.is_empty() => Some(s),
            serde_json::Value::Object(map) => map
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn error_field_becomes_message() {
        assert_eq!(
            error_message(400, r#"{"error":"Folder name is required"}"#),
            "Folder name is required"
        );
    }

    #[test]
    fn nested_error_message_is_read() {
        assert_eq!(
            error_message(500, r#"{"error":{"message":"db down"}}"#),
            "db down"
        );
    }

    #[test]
    fn missing_body_falls_back_to_status() {
        assert_eq!(error_message(502, ""), "HTTP error! status: 502");
        assert_eq!(error_message(500, "<html>oops</html>"), "HTTP error! status: 500");
        assert_eq!(error_message(404, r#"{"message":"nope"}"#), "HTTP error! status: 404");
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let resp = mock_response(404, r#"{"error":"Document not found"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Api { status: 404, ref message } if message == "Document not found"
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn empty_body_decodes_as_null() {
        let value: serde_json::Value = decode_json(mock_response(200, "")).await.unwrap();
        assert!(value.is_null());
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let err = decode_json::<Vec<u32>>(mock_response(200, "{not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
