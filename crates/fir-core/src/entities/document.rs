use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProcessingStatus;

/// An uploaded FIR document. Belongs to at most one folder.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub file_path: String,
    pub processing_status: ProcessingStatus,
    pub created_at: DateTime<Utc>,
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
    /// Folder summary embedded by the list endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderSummary>,
}

/// Minimal folder projection embedded in document listings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FolderSummary {
    pub name: String,
}
