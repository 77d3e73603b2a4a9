mod project;

pub use project::{PUBLISH_STATUS, ProjectRecord, WEBSITE_PROJECT_KIND, WebhookPayload};
