//! Dashboard counters and recent activity computed from a [`Library`].

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActivityKind, ProcessingStatus};
use crate::library::Library;

/// Number of activity items shown on the dashboard.
pub const RECENT_ACTIVITY_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCounts {
    pub uploaded: usize,
    pub processing: usize,
    pub ready: usize,
    pub error: usize,
}

impl StatusCounts {
    fn bump(&mut self, status: ProcessingStatus) {
        match status {
            ProcessingStatus::Uploaded => self.uploaded += 1,
            ProcessingStatus::Processing => self.processing += 1,
            ProcessingStatus::Ready => self.ready += 1,
            ProcessingStatus::Error => self.error += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub id: String,
    pub name: String,
    pub action: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_documents: usize,
    pub total_folders: usize,
    pub by_status: StatusCounts,
    pub recent_activity: Vec<ActivityItem>,
}

impl DashboardStats {
    #[must_use]
    pub fn from_library(library: &Library) -> Self {
        let mut by_status = StatusCounts::default();
        for doc in &library.documents {
            by_status.bump(doc.processing_status);
        }

        let mut activity: Vec<ActivityItem> = library
            .documents
            .iter()
            .map(|doc| ActivityItem {
                kind: ActivityKind::Document,
                id: doc.id.clone(),
                name: doc.title.clone(),
                action: if doc.processing_status == ProcessingStatus::Ready {
                    "Document processed"
                } else {
                    "New document added"
                }
                .to_string(),
                time: doc.created_at,
            })
            .chain(library.folders.iter().map(|folder| ActivityItem {
                kind: ActivityKind::Folder,
                id: folder.id.clone(),
                name: folder.name.clone(),
                action: "New folder created".to_string(),
                time: folder.created_at,
            }))
            .collect();
        // Stable sort keeps documents ahead of folders on equal timestamps.
        activity.sort_by(|a, b| b.time.cmp(&a.time));
        activity.truncate(RECENT_ACTIVITY_LIMIT);

        Self {
            total_documents: library.documents.len(),
            total_folders: library.folders.len(),
            by_status,
            recent_activity: activity,
        }
    }
}
