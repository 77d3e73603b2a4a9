//! Content record and webhook payload models.
//!
//! `ProjectRecord` is the read-only view a host adapter assembles from its
//! save lifecycle event and field accessors. `WebhookPayload` is derived from
//! a record that passed the guard sequence and is what goes over the wire.

use serde::{Deserialize, Serialize};

/// Content kind that qualifies for dispatch
pub const WEBSITE_PROJECT_KIND: &str = "website_project";

/// Lifecycle status that qualifies for dispatch
pub const PUBLISH_STATUS: &str = "publish";

// ============================================================================
// ProjectRecord
// ============================================================================

/// Snapshot of a content item at save time, as supplied by the host.
///
/// Host field accessors return empty strings for fields that have not been
/// attached yet (the save event can fire before field values are written), so
/// `None` and `""` both count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Opaque identifier, stable per content item
    pub id: String,

    /// Content kind tag, e.g. `website_project`
    pub kind: String,

    /// Lifecycle status, e.g. `draft`, `pending`, `publish`
    pub status: String,

    /// True when this save is an autosave shadow copy
    #[serde(default)]
    pub is_autosave: bool,

    /// True when this save is a revision shadow copy
    #[serde(default)]
    pub is_revision: bool,

    /// Display title
    pub title: String,

    /// Optional client name metadata field
    #[serde(default)]
    pub client_name: Option<String>,

    /// Optional project status metadata field ("In Progress", "Complete");
    /// opaque here, only the field editor constrains the value set
    #[serde(default)]
    pub project_status: Option<String>,
}

impl ProjectRecord {
    /// Creates a record for a normal (non-autosave, non-revision) save with
    /// no custom fields attached yet.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        status: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            status: status.into(),
            is_autosave: false,
            is_revision: false,
            title: title.into(),
            client_name: None,
            project_status: None,
        }
    }

    /// Marks the record as an autosave shadow copy
    pub fn autosave(mut self) -> Self {
        self.is_autosave = true;
        self
    }

    /// Marks the record as a revision shadow copy
    pub fn revision(mut self) -> Self {
        self.is_revision = true;
        self
    }

    /// Attaches the client name field
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    /// Attaches the project status field
    pub fn with_project_status(mut self, project_status: impl Into<String>) -> Self {
        self.project_status = Some(project_status.into());
        self
    }

    /// Whether the client name field has a non-empty value
    pub fn has_client_name(&self) -> bool {
        self.client_name.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Whether the project status field has a non-empty value
    pub fn has_project_status(&self) -> bool {
        self.project_status.as_deref().is_some_and(|s| !s.is_empty())
    }
}

// ============================================================================
// WebhookPayload
// ============================================================================

/// Wire payload for one dispatch. Serializes to exactly three keys:
/// `title` (string), `client_name` (string or null), `status` (string or null).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub title: String,
    pub client_name: Option<String>,
    pub status: Option<String>,
}

impl From<&ProjectRecord> for WebhookPayload {
    /// Builds a fresh payload from a record. Empty field values are carried
    /// as null, matching what an absent field reads as from the host.
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            client_name: record.client_name.clone().filter(|s| !s.is_empty()),
            status: record.project_status.clone().filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn published_project() -> ProjectRecord {
        ProjectRecord::new("42", WEBSITE_PROJECT_KIND, PUBLISH_STATUS, "Galderma")
            .with_client_name("Galderma Company")
            .with_project_status("In Progress")
    }

    #[test]
    fn test_payload_has_exactly_three_keys() {
        let payload = WebhookPayload::from(&published_project());
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("title"));
        assert!(object.contains_key("client_name"));
        assert!(object.contains_key("status"));
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = WebhookPayload::from(&published_project());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "title": "Galderma",
                "client_name": "Galderma Company",
                "status": "In Progress",
            })
        );
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = ProjectRecord::new("42", WEBSITE_PROJECT_KIND, PUBLISH_STATUS, "Galderma")
            .with_project_status("Complete");
        let value = serde_json::to_value(WebhookPayload::from(&record)).unwrap();
        assert!(value["client_name"].is_null());
        assert_eq!(value["status"], "Complete");
    }

    #[test]
    fn test_empty_string_field_becomes_null() {
        let record = published_project().with_client_name("");
        let value = serde_json::to_value(WebhookPayload::from(&record)).unwrap();
        assert!(value["client_name"].is_null());
    }

    #[test]
    fn test_empty_field_detection() {
        let record = ProjectRecord::new("42", WEBSITE_PROJECT_KIND, PUBLISH_STATUS, "Galderma");
        assert!(!record.has_client_name());
        assert!(!record.has_project_status());

        let record = record.with_client_name("");
        assert!(!record.has_client_name());

        let record = record.with_client_name("Galderma Company");
        assert!(record.has_client_name());
    }
}
