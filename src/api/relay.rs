//! CORS relay client. Browsers cannot read the stream host's metadata
//! endpoint or the station feeds directly, so every remote read goes
//! through a public relay that fetches the target server-side and wraps
//! the body in a JSON envelope:
//!
//! `{ "status": { "http_code": 200, ... }, "contents": "<raw body>" }`
//!
//! The relay's own reported status code must be a success before the
//! payload is trusted.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::time::Duration;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const RELAY_URL: &str = "https://api.allorigins.win/get";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RelayStatus {
    #[serde(default)]
    pub http_code: u16,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RelayEnvelope {
    #[serde(default)]
    pub status: RelayStatus,
    #[serde(default)]
    pub contents: String,
}

/// Build the relay request URL for a target resource.
pub fn relay_url(target: &str) -> String {
    format!("{RELAY_URL}?url={}", urlencoding::encode(target))
}

/// Decode the relay envelope and hand back the inner body, rejecting
/// anything the relay itself reported as a failure.
pub fn unwrap_envelope(body: &str) -> Result<String, String> {
    let envelope: RelayEnvelope =
        serde_json::from_str(body).map_err(|error| error.to_string())?;

    let code = envelope.status.http_code;
    if !(200..300).contains(&code) {
        return Err(format!("relay reported upstream status {code}"));
    }

    Ok(envelope.contents)
}

/// Fetch a resource through the relay and return its raw body.
pub async fn fetch_via_relay(target: &str) -> Result<String, String> {
    let response = HTTP_CLIENT
        .get(relay_url(target))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .send()
        .await
        .map_err(|error| error.to_string())?;

    if !response.status().is_success() {
        return Err(format!("relay status {}", response.status().as_u16()));
    }

    let body = response.text().await.map_err(|error| error.to_string())?;
    unwrap_envelope(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_url_encodes_target() {
        let url = relay_url("https://example.com/info?p=1&q=2");
        assert!(url.starts_with("https://api.allorigins.win/get?url="));
        assert!(url.contains("https%3A%2F%2Fexample.com%2Finfo%3Fp%3D1%26q%3D2"));
    }

    #[test]
    fn unwraps_successful_envelope() {
        let body = r#"{"status":{"http_code":200},"contents":"{\"title\":\"Song A\"}"}"#;
        assert_eq!(unwrap_envelope(body).unwrap(), r#"{"title":"Song A"}"#);
    }

    #[test]
    fn rejects_upstream_failure() {
        let body = r#"{"status":{"http_code":503},"contents":"Service Unavailable"}"#;
        let error = unwrap_envelope(body).unwrap_err();
        assert!(error.contains("503"), "unexpected error: {error}");
    }

    #[test]
    fn rejects_missing_status() {
        // A missing status block defaults to code 0, which is not success.
        assert!(unwrap_envelope(r#"{"contents":"x"}"#).is_err());
    }

    #[test]
    fn rejects_malformed_envelope() {
        assert!(unwrap_envelope("<html>not json</html>").is_err());
        assert!(unwrap_envelope("").is_err());
    }
}
