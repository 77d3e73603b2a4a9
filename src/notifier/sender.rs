//! Webhook delivery over HTTP.
//!
//! Sends the JSON payload to the configured endpoint using the global
//! `HTTP_CLIENT`.

use std::time::{Duration, Instant};

use crate::config::WebhookConfig;
use crate::error::{AppError, AppResult};
use crate::external::HTTP_CLIENT;
use crate::models::WebhookPayload;

/// Observational record of one accepted delivery.
///
/// Used for logging only; delivery state is never persisted and there is no
/// acknowledgment tracking across saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status the endpoint answered with
    pub status: u16,
    /// Time taken for the round trip in milliseconds
    pub duration_ms: u64,
}

/// Sends webhook payloads to a fixed, pre-validated endpoint.
#[derive(Debug)]
pub struct WebhookSender {
    url: String,
    timeout: Duration,
}

impl WebhookSender {
    /// Creates a sender from webhook configuration.
    ///
    /// The URL is taken as-is; `WebhookConfig::validate` has already run by
    /// the time a sender is constructed (see `PublishNotifier::new`).
    pub fn new(config: &WebhookConfig) -> Self {
        Self {
            url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// The destination endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// Performs exactly one `POST` with `Content-Type: application/json` and
    /// the JSON-encoded payload as body.
    ///
    /// The response body is not consumed; only the status matters. Transport
    /// failures (connection error, timeout) map to [`AppError::Delivery`],
    /// non-2xx responses to [`AppError::EndpointStatus`]. No retry is
    /// attempted at this layer or any other.
    pub async fn send(&self, payload: &WebhookPayload) -> AppResult<Delivery> {
        let start = Instant::now();

        let response = HTTP_CLIENT
            .post(&self.url)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|source| AppError::Delivery {
                endpoint: self.url.clone(),
                source,
            })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            return Err(AppError::EndpointStatus {
                endpoint: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(Delivery {
            status: status.as_u16(),
            duration_ms,
        })
    }
}
