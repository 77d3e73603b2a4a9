//! Publish notifier: the inbound interface host adapters call on every save.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::guard::{self, SkipReason};
use super::sender::{Delivery, WebhookSender};
use crate::config::WebhookConfig;
use crate::error::AppResult;
use crate::models::{ProjectRecord, WebhookPayload};

/// Outcome of an inline dispatch attempt.
///
/// Returned for observability; the host is free to ignore it. A failed
/// delivery is reported here and in the logs but never as an error, so the
/// host's save pipeline always completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Guards passed and the endpoint accepted the payload
    Delivered(Delivery),
    /// A guard failed; no request was made
    Skipped(SkipReason),
    /// Guards passed but delivery failed; logged and swallowed
    Failed,
}

/// Outcome of a detached dispatch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchDecision {
    /// Guards passed; delivery was handed to a background task
    Enqueued,
    /// A guard failed; nothing was enqueued
    Skipped(SkipReason),
}

/// Decides once per content-save lifecycle event whether to notify the
/// configured endpoint, and if so sends one JSON POST.
///
/// Stateless across invocations: guards re-evaluate on every save and there
/// is no memory of previous dispatches, so a second qualifying save of the
/// same record sends again.
#[derive(Clone)]
pub struct PublishNotifier {
    sender: Arc<WebhookSender>,
}

impl PublishNotifier {
    /// Creates a notifier from webhook configuration.
    ///
    /// The configuration is validated here, at startup, so the dispatch path
    /// never has to deal with a malformed endpoint.
    pub fn new(config: &WebhookConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            sender: Arc::new(WebhookSender::new(config)),
        })
    }

    /// Handles one content-save lifecycle event, blocking the calling task
    /// for the duration of the POST.
    ///
    /// Safe to call at high frequency: non-qualifying saves short-circuit at
    /// the first failing guard with no side effect. Delivery failures are
    /// logged and swallowed; this method never panics on network failure and
    /// never propagates an error into the host's save pipeline.
    pub async fn on_save(&self, record: &ProjectRecord) -> DispatchOutcome {
        if let Err(reason) = guard::evaluate(record) {
            debug!(record_id = %record.id, reason = %reason, "save skipped");
            return DispatchOutcome::Skipped(reason);
        }

        let payload = WebhookPayload::from(record);
        match self.sender.send(&payload).await {
            Ok(delivery) => {
                info!(
                    record_id = %record.id,
                    status = delivery.status,
                    duration_ms = delivery.duration_ms,
                    "webhook delivered"
                );
                DispatchOutcome::Delivered(delivery)
            }
            Err(err) => {
                warn!(record_id = %record.id, error = %err, "webhook delivery failed");
                DispatchOutcome::Failed
            }
        }
    }

    /// Handles one content-save lifecycle event without blocking the caller
    /// on network latency.
    ///
    /// The guard sequence runs synchronously, so the decision to notify is
    /// made exactly as in [`on_save`](Self::on_save); only the delivery
    /// itself moves to a spawned task. Must be called from within a Tokio
    /// runtime.
    pub fn on_save_detached(&self, record: &ProjectRecord) -> DispatchDecision {
        if let Err(reason) = guard::evaluate(record) {
            debug!(record_id = %record.id, reason = %reason, "save skipped");
            return DispatchDecision::Skipped(reason);
        }

        let payload = WebhookPayload::from(record);
        let sender = Arc::clone(&self.sender);
        let record_id = record.id.clone();
        tokio::spawn(async move {
            match sender.send(&payload).await {
                Ok(delivery) => {
                    info!(
                        record_id = %record_id,
                        status = delivery.status,
                        duration_ms = delivery.duration_ms,
                        "webhook delivered"
                    );
                }
                Err(err) => {
                    warn!(record_id = %record_id, error = %err, "webhook delivery failed");
                }
            }
        });

        DispatchDecision::Enqueued
    }

    /// The destination endpoint this notifier posts to
    pub fn endpoint(&self) -> &str {
        self.sender.endpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{PUBLISH_STATUS, WEBSITE_PROJECT_KIND};

    fn notifier(url: &str) -> PublishNotifier {
        PublishNotifier::new(&WebhookConfig {
            url: url.to_string(),
            timeout_seconds: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = PublishNotifier::new(&WebhookConfig {
            url: String::new(),
            timeout_seconds: 10,
        });
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_skip_makes_no_request() {
        // Port 1 would refuse the connection; a skip never gets that far
        let notifier = notifier("http://127.0.0.1:1/hook");
        let record = ProjectRecord::new("7", "page", PUBLISH_STATUS, "About us")
            .with_client_name("Acme");
        assert_eq!(
            notifier.on_save(&record).await,
            DispatchOutcome::Skipped(SkipReason::ForeignKind)
        );
    }

    #[tokio::test]
    async fn test_delivery_failure_is_swallowed() {
        let notifier = notifier("http://127.0.0.1:1/hook");
        let record = ProjectRecord::new("7", WEBSITE_PROJECT_KIND, PUBLISH_STATUS, "Galderma")
            .with_client_name("Galderma Company");
        assert_eq!(notifier.on_save(&record).await, DispatchOutcome::Failed);
    }

    #[tokio::test]
    async fn test_detached_skip_does_not_enqueue() {
        let notifier = notifier("http://127.0.0.1:1/hook");
        let record =
            ProjectRecord::new("7", WEBSITE_PROJECT_KIND, "draft", "Galderma").with_client_name("x");
        assert_eq!(
            notifier.on_save_detached(&record),
            DispatchDecision::Skipped(SkipReason::NotPublished)
        );
    }
}
