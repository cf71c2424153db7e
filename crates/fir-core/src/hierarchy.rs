//! Folder hierarchy resolution.
//!
//! Folders arrive from the API as a flat list of parent-pointing records. This
//! module rebuilds root-to-leaf breadcrumb paths from that list. Every path
//! starts with the synthetic root crumb (`Home`, no id).
//!
//! Missing records degrade softly: an unknown target yields the root-only path
//! and an unknown ancestor ends the walk. A revisited folder is a hard
//! [`CoreError::FolderCycle`].

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Document, Folder};
use crate::errors::CoreError;

/// Display name of the synthetic root crumb.
pub const ROOT_NAME: &str = "Home";

/// One breadcrumb entry. The root crumb has no id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Crumb {
    pub id: Option<String>,
    pub name: String,
}

impl Crumb {
    #[must_use]
    pub fn root() -> Self {
        Self {
            id: None,
            name: ROOT_NAME.to_string(),
        }
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.id.is_none()
    }
}

impl From<&Folder> for Crumb {
    fn from(folder: &Folder) -> Self {
        Self {
            id: Some(folder.id.clone()),
            name: folder.name.clone(),
        }
    }
}

/// Identifier lookup over a borrowed folder list.
#[derive(Debug)]
pub struct FolderIndex<'a> {
    by_id: HashMap<&'a str, &'a Folder>,
}

impl<'a> FolderIndex<'a> {
    #[must_use]
    pub fn new(folders: &'a [Folder]) -> Self {
        Self {
            by_id: folders.iter().map(|f| (f.id.as_str(), f)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Folder> {
        self.by_id.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Breadcrumb path from the root to `target`.
    ///
    /// `None` targets the root itself. A target absent from the index yields
    /// the root-only path.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FolderCycle`] if the `parent_id` chain revisits a
    /// folder.
    pub fn path_to(&self, target: Option<&str>) -> Result<Vec<Crumb>, CoreError> {
        let Some(target) = target else {
            return Ok(vec![Crumb::root()]);
        };
        if self.get(target).is_none() {
            tracing::warn!(folder_id = target, "folder not found; using root breadcrumb");
            return Ok(vec![Crumb::root()]);
        }

        // The visited set can never exceed the number of distinct folders, so
        // the walk is bounded even on malformed data.
        let mut visited: HashSet<&str> = HashSet::with_capacity(self.len());
        let mut ancestors = Vec::new();
        let mut current = Some(target);

        while let Some(id) = current {
            let Some(folder) = self.get(id) else {
                tracing::debug!(folder_id = id, "ancestor missing; breadcrumb truncated");
                break;
            };
            if !visited.insert(folder.id.as_str()) {
                return Err(CoreError::FolderCycle { id: id.to_string() });
            }
            ancestors.push(Crumb::from(folder));
            current = folder.parent_id.as_deref();
        }

        let mut path = Vec::with_capacity(ancestors.len() + 1);
        path.push(Crumb::root());
        path.extend(ancestors.into_iter().rev());
        Ok(path)
    }

    /// Number of folders between the root and `id`, counting `id` itself.
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError::FolderCycle`] from [`Self::path_to`].
    pub fn depth(&self, id: &str) -> Result<usize, CoreError> {
        Ok(self.path_to(Some(id))?.len() - 1)
    }
}

/// Resolve the breadcrumb path for a folder from a flat folder list.
///
/// # Errors
///
/// Returns [`CoreError::FolderCycle`] if the folder data contains a cycle on
/// the walked chain.
pub fn resolve_path(target: Option<&str>, folders: &[Folder]) -> Result<Vec<Crumb>, CoreError> {
    FolderIndex::new(folders).path_to(target)
}

/// Resolve the breadcrumb path of a document's containing folder.
///
/// # Errors
///
/// Returns [`CoreError::FolderCycle`] if the folder data contains a cycle on
/// the walked chain.
pub fn document_path(document: &Document, folders: &[Folder]) -> Result<Vec<Crumb>, CoreError> {
    resolve_path(document.folder_id.as_deref(), folders)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::enums::ProcessingStatus;

    fn folder(id: &str, parent: Option<&str>) -> Folder {
        Folder {
            id: id.to_string(),
            name: format!("Folder {id}"),
            parent_id: parent.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    fn chain(depth: usize) -> Vec<Folder> {
        (0..depth)
            .map(|i| {
                let parent = (i > 0).then(|| format!("f{}", i - 1));
                folder(&format!("f{i}"), parent.as_deref())
            })
            .collect()
    }

    fn ids(path: &[Crumb]) -> Vec<Option<&str>> {
        path.iter().map(|c| c.id.as_deref()).collect()
    }

    #[test]
    fn resolves_two_level_path() {
        let folders = vec![folder("A", None), folder("B", Some("A"))];
        let path = resolve_path(Some("B"), &folders).unwrap();
        assert_eq!(ids(&path), vec![None, Some("A"), Some("B")]);
        assert_eq!(path[0].name, "Home");
        assert_eq!(path[1].name, "Folder A");
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(32)]
    fn acyclic_path_length_is_depth_plus_one(#[case] depth: usize) {
        let folders = chain(depth);
        let target = format!("f{}", depth - 1);
        let path = resolve_path(Some(&target), &folders).unwrap();

        assert_eq!(path.len(), depth + 1);
        assert!(path[0].is_root());
        assert_eq!(path.last().unwrap().id.as_deref(), Some(target.as_str()));

        let unique: HashSet<_> = path.iter().map(|c| c.id.clone()).collect();
        assert_eq!(unique.len(), path.len());
    }

    #[test]
    fn unknown_target_degrades_to_root() {
        let folders = chain(3);
        let path = resolve_path(Some("missing"), &folders).unwrap();
        assert_eq!(path, vec![Crumb::root()]);
    }

    #[test]
    fn no_target_is_root() {
        assert_eq!(resolve_path(None, &[]).unwrap(), vec![Crumb::root()]);
    }

    #[test]
    fn dangling_parent_ends_walk() {
        let folders = vec![folder("B", Some("gone")), folder("C", Some("B"))];
        let path = resolve_path(Some("C"), &folders).unwrap();
        assert_eq!(ids(&path), vec![None, Some("B"), Some("C")]);
    }

    #[test]
    fn cycle_is_reported() {
        let folders = vec![
            folder("A", Some("C")),
            folder("B", Some("A")),
            folder("C", Some("B")),
        ];
        let err = resolve_path(Some("B"), &folders).unwrap_err();
        assert!(matches!(err, CoreError::FolderCycle { .. }));
    }

    #[test]
    fn self_parent_is_a_cycle() {
        let folders = vec![folder("A", Some("A"))];
        let err = resolve_path(Some("A"), &folders).unwrap_err();
        assert!(matches!(err, CoreError::FolderCycle { id } if id == "A"));
    }

    #[test]
    fn document_path_follows_folder_id() {
        let folders = vec![folder("A", None), folder("B", Some("A"))];
        let mut doc = Document {
            id: "d1".into(),
            title: "FIR 12/2025".into(),
            file_path: "uploads/d1.pdf".into(),
            processing_status: ProcessingStatus::Ready,
            created_at: Utc::now(),
            folder_id: Some("B".into()),
            error_text: None,
            folder: None,
        };
        assert_eq!(
            ids(&document_path(&doc, &folders).unwrap()),
            vec![None, Some("A"), Some("B")]
        );

        doc.folder_id = None;
        assert_eq!(document_path(&doc, &folders).unwrap(), vec![Crumb::root()]);
    }

    #[test]
    fn depth_counts_folders_below_root() {
        let folders = chain(4);
        let index = FolderIndex::new(&folders);
        assert_eq!(index.depth("f0").unwrap(), 1);
        assert_eq!(index.depth("f3").unwrap(), 4);
    }
}
