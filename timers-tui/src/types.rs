use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque timer identifier.
///
/// Generated client-side as a UUID v4 string; the server may hand back its own
/// identity on the next refresh, so nothing else is assumed about the format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerId(String);

impl TimerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a timer created on this client.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TimerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TimerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TimerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A timer record as held by the store and exchanged with the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: TimerId,
    pub title: String,
    pub project: String,
    /// Milliseconds accumulated over completed runs.
    #[serde(default)]
    pub elapsed: u64,
    /// Epoch milliseconds of the last start, `None` while stopped.
    #[serde(default)]
    pub running_since: Option<i64>,
}

impl Timer {
    /// A stopped timer with nothing accumulated yet.
    pub fn new(id: TimerId, draft: TimerDraft) -> Self {
        Self {
            id,
            title: draft.title,
            project: draft.project,
            elapsed: 0,
            running_since: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }
}

/// Title and project as typed into a create form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimerDraft {
    pub title: String,
    pub project: String,
}

/// Attributes submitted from an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerAttrs {
    pub id: TimerId,
    pub title: String,
    pub project: String,
}
