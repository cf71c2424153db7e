use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A folder in the document tree. Root folders have no `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Whether this folder sits directly under the synthetic root.
    #[must_use]
    pub const fn is_root_level(&self) -> bool {
        self.parent_id.is_none()
    }
}
