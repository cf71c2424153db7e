//! Folder resource.

use fir_core::entities::Folder;
use fir_core::hierarchy::Crumb;
use fir_core::requests::{FolderUpdate, NewFolder};

use crate::{ApiClient, Query, error::ApiError, segment};

pub(crate) fn folders_path(parent_id: Option<&str>) -> String {
    Query::new().opt("parentId", parent_id).apply("/folders")
}

impl ApiClient {
    /// List folders, optionally only the children of `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be parsed.
    pub async fn list_folders(&self, parent_id: Option<&str>) -> Result<Vec<Folder>, ApiError> {
        self.get(&folders_path(parent_id)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 when the folder does not exist.
    pub async fn get_folder(&self, id: &str) -> Result<Folder, ApiError> {
        self.get(&format!("/folders/{}", segment(id))).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the folder.
    pub async fn create_folder(&self, folder: &NewFolder) -> Result<Folder, ApiError> {
        self.post("/folders", folder).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the update.
    pub async fn update_folder(&self, id: &str, update: &FolderUpdate) -> Result<Folder, ApiError> {
        self.put(&format!("/folders/{}", segment(id)), update).await
    }

    /// Delete a folder. The server's acknowledgement body is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the deletion.
    pub async fn delete_folder(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.delete(&format!("/folders/{}", segment(id))).await
    }

    /// Breadcrumb path from the root to `folder_id`, built from the full folder list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the folder list cannot be fetched and
    /// [`ApiError::Core`] if the folder data contains a cycle.
    pub async fn folder_path(&self, folder_id: Option<&str>) -> Result<Vec<Crumb>, ApiError> {
        let folders = self.list_folders(None).await?;
        Ok(fir_core::hierarchy::resolve_path(folder_id, &folders)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_with_and_without_parent() {
        assert_eq!(folders_path(None), "/folders");
        assert_eq!(folders_path(Some("fld-1")), "/folders?parentId=fld-1");
    }

    #[test]
    fn parse_folder_list() {
        let json = r#"[
            {"id": "A", "name": "Pune", "parent_id": null, "created_at": "2025-10-01T10:00:00Z"},
            {"id": "B", "name": "Kothrud", "parent_id": "A", "created_at": "2025-10-02T10:00:00Z"}
        ]"#;
        let folders: Vec<Folder> = crate::http::decode_body("/api/folders", json).unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[1].parent_id.as_deref(), Some("A"));

        let path = fir_core::hierarchy::resolve_path(Some("B"), &folders).unwrap();
        let names: Vec<&str> = path.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Pune", "Kothrud"]);
    }
}
