//! Pubhook Library
//!
//! Publish-triggered webhook dispatch for CMS content-save events. A host
//! adapter translates its save lifecycle event into a [`models::ProjectRecord`]
//! and hands it to [`PublishNotifier`]; the notifier runs the guard sequence
//! and, when the record qualifies, POSTs a JSON payload to the configured
//! endpoint.

pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod notifier;

pub use notifier::{DispatchDecision, DispatchOutcome, PublishNotifier};

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
