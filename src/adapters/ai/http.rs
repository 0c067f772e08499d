//! HTTP plumbing shared by the enrichment clients.

use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use crate::ports::EnrichmentError;

/// Builds a client whose per-request timeout backs up the orchestrator's bound.
pub(super) fn build_client(timeout: Duration) -> Result<Client, EnrichmentError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| EnrichmentError::InvalidRequest(format!("failed to build HTTP client: {}", e)))
}

/// Maps a transport failure onto the enrichment error taxonomy.
pub(super) fn map_send_error(error: reqwest::Error, timeout: Duration) -> EnrichmentError {
    if error.is_timeout() {
        EnrichmentError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else if error.is_connect() {
        EnrichmentError::network(format!("Connection failed: {}", error))
    } else {
        EnrichmentError::network(error.to_string())
    }
}

/// Passes successful responses through and maps failures by status code.
pub(super) async fn check_status(
    response: Response,
    default_retry_secs: u32,
) -> Result<Response, EnrichmentError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_body = response.text().await.unwrap_or_default();
    Err(map_status(status, error_body, default_retry_secs))
}

pub(super) fn map_status(
    status: StatusCode,
    error_body: String,
    default_retry_secs: u32,
) -> EnrichmentError {
    match status.as_u16() {
        401 | 403 => EnrichmentError::AuthenticationFailed,
        429 => EnrichmentError::rate_limited(
            parse_retry_after(&error_body).unwrap_or(default_retry_secs),
        ),
        500..=599 => EnrichmentError::unavailable(format!("Server error {}: {}", status, error_body)),
        400..=499 => EnrichmentError::InvalidRequest(format!("{}: {}", status, error_body)),
        _ => EnrichmentError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Extracts `N` from a "try again in Ns" error message.
pub(super) fn parse_retry_after(error_body: &str) -> Option<u32> {
    let parsed = serde_json::from_str::<serde_json::Value>(error_body).ok()?;
    let message = parsed.get("error")?.get("message")?.as_str()?;
    let idx = message.find("try again in ")?;
    let rest = &message[idx + "try again in ".len()..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
