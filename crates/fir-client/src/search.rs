//! Search resource: structured full-text search, vector search, and the
//! chunk/page retrieval used to show search hits in context.
//!
//! Responses are forwarded as raw JSON; their shape depends on the
//! server's search backend.

use fir_core::enums::ProcessingStatus;
use fir_core::requests::VectorSearchRequest;
use serde_json::Value;

use crate::{ApiClient, Query, error::ApiError, segment};

/// Parameters of `GET /search`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub q: Option<String>,
    pub folder_id: Option<String>,
    pub status: Option<ProcessingStatus>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    pub fir_number: Option<String>,
    pub police_station: Option<String>,
    pub district: Option<String>,
    /// Comma-separated act names.
    pub acts: Option<String>,
    /// Comma-separated section numbers.
    pub sections: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl SearchFilters {
    #[must_use]
    pub fn text(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    pub(crate) fn path(&self) -> String {
        Query::new()
            .opt("q", self.q.as_deref())
            .opt("folderId", self.folder_id.as_deref())
            .opt("status", self.status)
            .opt("startDate", self.start_date.as_deref())
            .opt("endDate", self.end_date.as_deref())
            .opt("firNumber", self.fir_number.as_deref())
            .opt("policeStation", self.police_station.as_deref())
            .opt("district", self.district.as_deref())
            .opt("acts", self.acts.as_deref())
            .opt("sections", self.sections.as_deref())
            .opt("limit", self.limit)
            .opt("offset", self.offset)
            .apply("/search")
    }
}

fn chunks_path(document_id: &str, limit: Option<u32>, offset: Option<u32>) -> String {
    Query::new()
        .opt("limit", limit)
        .opt("offset", offset)
        .apply(&format!("/search/chunks/{}", segment(document_id)))
}

fn pages_path(document_id: &str, page: Option<u32>) -> String {
    Query::new()
        .opt("page", page)
        .apply(&format!("/search/pages/{}", segment(document_id)))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn search(&self, filters: &SearchFilters) -> Result<Value, ApiError> {
        self.get(&filters.path()).await
    }

    /// Semantic search over document chunks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn vector_search(&self, request: &VectorSearchRequest) -> Result<Value, ApiError> {
        self.post("/search/vector", request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn document_chunks(
        &self,
        document_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, ApiError> {
        self.get(&chunks_path(document_id, limit, offset)).await
    }

    /// OCR pages of a document; all pages when `page` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn document_pages(&self, document_id: &str, page: Option<u32>) -> Result<Value, ApiError> {
        self.get(&pages_path(document_id, page)).await
    }
}
