//! In-memory snapshot of folders and documents, plus the mutation merge contract.
//!
//! A [`Library`] is a cached copy of server state. After a create, update, or
//! delete succeeds on the server, callers either re-fetch or pass the outcome
//! through [`Library::apply_folder`] or [`Library::apply_document`], both
//! backed by [`merge`]. No other code edits the lists.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Document, Folder};
use crate::enums::{ActivityKind, ProcessingStatus};
use crate::errors::CoreError;
use crate::hierarchy::{Crumb, FolderIndex};

/// Records addressable by a stable server identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Folder {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Document {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Outcome of a successful server-side mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<T> {
    Created(T),
    Updated(T),
    Deleted(String),
}

/// Merge one mutation into a record list.
///
/// `Created` and `Updated` both upsert by key; they differ only in where a new
/// record lands (`Created` appends, `Updated` replaces in place and appends if
/// the record was not cached). `Deleted` removes every record with the key.
pub fn merge<T: Keyed>(records: &mut Vec<T>, mutation: Mutation<T>) {
    match mutation {
        Mutation::Created(record) => {
            records.retain(|r| r.key() != record.key());
            records.push(record);
        }
        Mutation::Updated(record) => {
            if let Some(slot) = records.iter_mut().find(|r| r.key() == record.key()) {
                *slot = record;
            } else {
                records.push(record);
            }
        }
        Mutation::Deleted(id) => records.retain(|r| r.key() != id),
    }
}

/// Cached folders and documents, loaded together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Library {
    pub folders: Vec<Folder>,
    pub documents: Vec<Document>,
}

impl Library {
    #[must_use]
    pub const fn new(folders: Vec<Folder>, documents: Vec<Document>) -> Self {
        Self { folders, documents }
    }

    #[must_use]
    pub fn index(&self) -> FolderIndex<'_> {
        FolderIndex::new(&self.folders)
    }

    #[must_use]
    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Apply a folder mutation. Deleting a folder also drops its documents
    /// from the cache.
    pub fn apply_folder(&mut self, mutation: Mutation<Folder>) {
        if let Mutation::Deleted(id) = &mutation {
            self.documents
                .retain(|d| d.folder_id.as_deref() != Some(id.as_str()));
        }
        merge(&mut self.folders, mutation);
    }

    pub fn apply_document(&mut self, mutation: Mutation<Document>) {
        merge(&mut self.documents, mutation);
    }

    /// Breadcrumb path for `folder_id` (root when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FolderCycle`] on cyclic folder data.
    pub fn path_to(&self, folder_id: Option<&str>) -> Result<Vec<Crumb>, CoreError> {
        self.index().path_to(folder_id)
    }

    /// Direct children of `parent` (root when `None`), folders first.
    #[must_use]
    pub fn children(&self, parent: Option<&str>) -> Vec<BrowserEntry> {
        let folders = self
            .folders
            .iter()
            .filter(|f| f.parent_id.as_deref() == parent);
        let documents = self
            .documents
            .iter()
            .filter(|d| d.folder_id.as_deref() == parent);
        self.entries(folders, documents)
    }

    /// Case-insensitive search over folder names, document titles, and the
    /// embedded folder name of each document. Folders first.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<BrowserEntry> {
        let needle = term.to_lowercase();
        let folders = self
            .folders
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle));
        let documents = self.documents.iter().filter(|d| {
            d.title.to_lowercase().contains(&needle)
                || d
                    .folder
                    .as_ref()
                    .is_some_and(|f| f.name.to_lowercase().contains(&needle))
        });
        self.entries(folders, documents)
    }

    fn entries<'a>(
        &self,
        folders: impl Iterator<Item = &'a Folder>,
        documents: impl Iterator<Item = &'a Document>,
    ) -> Vec<BrowserEntry> {
        let mut entries: Vec<BrowserEntry> = folders
            .map(|folder| BrowserEntry {
                kind: ActivityKind::Folder,
                id: folder.id.clone(),
                name: folder.name.clone(),
                status: None,
                folders: Some(self.subfolder_count(&folder.id)),
                documents: Some(self.document_count(&folder.id)),
                created_at: folder.created_at,
            })
            .collect();
        entries.extend(documents.map(|doc| BrowserEntry {
            kind: ActivityKind::Document,
            id: doc.id.clone(),
            name: doc.title.clone(),
            status: Some(doc.processing_status),
            folders: None,
            documents: None,
            created_at: doc.created_at,
        }));
        entries
    }

    fn subfolder_count(&self, id: &str) -> usize {
        self.folders
            .iter()
            .filter(|f| f.parent_id.as_deref() == Some(id))
            .count()
    }

    fn document_count(&self, id: &str) -> usize {
        self.documents
            .iter()
            .filter(|d| d.folder_id.as_deref() == Some(id))
            .count()
    }
}

/// One row of the folder browser.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BrowserEntry {
    pub kind: ActivityKind,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProcessingStatus>,
    /// Subfolder count, folders only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders: Option<usize>,
    /// Contained document count, folders only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<usize>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::FolderSummary;

    fn folder(id: &str, name: &str, parent: Option<&str>) -> Folder {
        Folder {
            id: id.into(),
            name: name.into(),
            parent_id: parent.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn doc(id: &str, title: &str, folder_id: Option<&str>) -> Document {
        Document {
            id: id.into(),
            title: title.into(),
            file_path: format!("uploads/{id}.pdf"),
            processing_status: ProcessingStatus::Ready,
            created_at: Utc::now(),
            folder_id: folder_id.map(str::to_string),
            error_text: None,
            folder: None,
        }
    }

    fn sample() -> Library {
        Library::new(
            vec![
                folder("pune", "Pune District", None),
                folder("kothrud", "Kothrud PS", Some("pune")),
                folder("nashik", "Nashik District", None),
            ],
            vec![
                doc("d1", "FIR 101/2025 theft", Some("kothrud")),
                doc("d2", "FIR 7/2025 assault", None),
                doc("d3", "FIR 55/2025 fraud", Some("pune")),
            ],
        )
    }

    fn keys(entries: &[BrowserEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn root_children_are_folders_then_documents() {
        let library = sample();
        let entries = library.children(None);
        assert_eq!(keys(&entries), vec!["pune", "nashik", "d2"]);
        assert_eq!(entries[0].folders, Some(1));
        assert_eq!(entries[0].documents, Some(1));
        assert_eq!(entries[2].status, Some(ProcessingStatus::Ready));
    }

    #[test]
    fn nested_children() {
        let library = sample();
        assert_eq!(keys(&library.children(Some("pune"))), vec!["kothrud", "d3"]);
        assert_eq!(keys(&library.children(Some("kothrud"))), vec!["d1"]);
    }

    #[test]
    fn search_matches_names_titles_and_embedded_folder() {
        let mut library = sample();
        library.documents[1].folder = Some(FolderSummary {
            name: "Archive".into(),
        });

        assert_eq!(keys(&library.search("DISTRICT")), vec!["pune", "nashik"]);
        assert_eq!(keys(&library.search("fraud")), vec!["d3"]);
        assert_eq!(keys(&library.search("archive")), vec!["d2"]);
    }

    #[test]
    fn created_appends_and_replaces_duplicates() {
        let mut library = sample();
        library.apply_folder(Mutation::Created(folder("satara", "Satara", None)));
        assert_eq!(library.folders.last().unwrap().id, "satara");

        library.apply_folder(Mutation::Created(folder("satara", "Satara District", None)));
        let satara: Vec<_> = library.folders.iter().filter(|f| f.id == "satara").collect();
        assert_eq!(satara.len(), 1);
        assert_eq!(satara[0].name, "Satara District");
    }

    #[test]
    fn updated_replaces_in_place() {
        let mut library = sample();
        library.apply_document(Mutation::Updated(doc("d2", "FIR 7/2025 renamed", None)));
        assert_eq!(library.documents[1].title, "FIR 7/2025 renamed");
        assert_eq!(library.documents.len(), 3);

        library.apply_document(Mutation::Updated(doc("d9", "late arrival", None)));
        assert_eq!(library.documents.len(), 4);
    }

    #[test]
    fn deleting_folder_drops_its_documents() {
        let mut library = sample();
        library.apply_folder(Mutation::Deleted("kothrud".into()));
        assert!(library.folder("kothrud").is_none());
        assert!(library.document("d1").is_none());
        assert_eq!(library.documents.len(), 2);
    }

    #[test]
    fn deleting_document_leaves_folders() {
        let mut library = sample();
        library.apply_document(Mutation::Deleted("d3".into()));
        assert!(library.document("d3").is_none());
        assert_eq!(library.folders.len(), 3);
    }
}
