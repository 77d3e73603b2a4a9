//! Publish-triggered webhook dispatch.
//!
//! The host adapter calls [`PublishNotifier::on_save`] (or the non-blocking
//! [`PublishNotifier::on_save_detached`]) once per content-save lifecycle
//! event. The guard sequence in [`guard`] decides whether the event warrants
//! a notification; [`WebhookSender`] performs the single outbound POST.

pub mod guard;
mod sender;
mod service;

pub use guard::SkipReason;
pub use sender::{Delivery, WebhookSender};
pub use service::{DispatchDecision, DispatchOutcome, PublishNotifier};
