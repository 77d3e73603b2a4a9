//! Guard sequence deciding whether a save event warrants dispatch.
//!
//! Saves fire at high frequency (autosave, revision, publish can arrive in
//! quick succession for one user action), so this is pure, cheap, and
//! re-evaluated on every call. The first failing guard short-circuits with no
//! side effect.

use crate::models::{PUBLISH_STATUS, ProjectRecord, WEBSITE_PROJECT_KIND};

/// Reason a save event produced no dispatch.
///
/// Normal control flow, not an error: every save of every content item flows
/// through the notifier and most saves are expected to skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record is not a website project
    ForeignKind,
    /// The save is an autosave shadow copy
    Autosave,
    /// The save is a revision shadow copy
    Revision,
    /// The record is not in the published state
    NotPublished,
    /// Neither custom field has a value yet; the save event can fire before
    /// field values are attached, and dispatching then would send a payload
    /// with every field null
    EmptyFields,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ForeignKind => "foreign_kind",
            SkipReason::Autosave => "autosave",
            SkipReason::Revision => "revision",
            SkipReason::NotPublished => "not_published",
            SkipReason::EmptyFields => "empty_fields",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Applies the guards in order. All must pass for a dispatch to happen:
///
/// 1. kind is `website_project`
/// 2. the save is not an autosave or revision shadow copy
/// 3. status is `publish`
/// 4. at least one custom field has a non-empty value
pub fn evaluate(record: &ProjectRecord) -> Result<(), SkipReason> {
    if record.kind != WEBSITE_PROJECT_KIND {
        return Err(SkipReason::ForeignKind);
    }
    if record.is_autosave {
        return Err(SkipReason::Autosave);
    }
    if record.is_revision {
        return Err(SkipReason::Revision);
    }
    if record.status != PUBLISH_STATUS {
        return Err(SkipReason::NotPublished);
    }
    if !record.has_client_name() && !record.has_project_status() {
        return Err(SkipReason::EmptyFields);
    }
    Ok(())
}
