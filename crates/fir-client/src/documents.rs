//! Document resource: CRUD, details/metadata, upload, analysis, download.

use std::path::Path;

use fir_core::entities::{AnalysisResult, Document, JobHandle, JobReport, StagedUpload, UploadedFile};
use fir_core::enums::ProcessingStatus;
use fir_core::hierarchy::Crumb;
use fir_core::requests::{AnalyzeRequest, DocumentUpdate, SaveRequest};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::{ApiClient, Query, error::ApiError, segment};

/// MIME type sent for uploaded files. The service only ingests PDFs.
pub const PDF_MIME: &str = "application/pdf";

/// Filters for `GET /documents`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub folder_id: Option<String>,
    pub status: Option<ProcessingStatus>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl DocumentFilter {
    pub(crate) fn path(&self) -> String {
        Query::new()
            .opt("folderId", self.folder_id.as_deref())
            .opt("status", self.status)
            .opt("limit", self.limit)
            .opt("offset", self.offset)
            .apply("/documents")
    }
}

fn resource_path(id: &str, suffix: &str) -> String {
    format!("/documents/{}{suffix}", segment(id))
}

/// Build the multipart body shared by `upload` and `upload-temp`.
async fn pdf_form(
    file: &Path,
    folder_id: Option<&str>,
    title: Option<&str>,
) -> Result<Form, ApiError> {
    let bytes = tokio::fs::read(file).await?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    let part = Part::bytes(bytes).file_name(file_name).mime_str(PDF_MIME)?;

    let mut form = Form::new().part("file", part);
    if let Some(folder_id) = folder_id.filter(|v| !v.is_empty()) {
        form = form.text("folderId", folder_id.to_string());
    }
    if let Some(title) = title.filter(|v| !v.is_empty()) {
        form = form.text("title", title.to_string());
    }
    Ok(form)
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be parsed.
    pub async fn list_documents(&self, filter: &DocumentFilter) -> Result<Vec<Document>, ApiError> {
        self.get(&filter.path()).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 when the document does not exist.
    pub async fn get_document(&self, id: &str) -> Result<Document, ApiError> {
        self.get(&resource_path(id, "")).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the update.
    pub async fn update_document(
        &self,
        id: &str,
        update: &DocumentUpdate,
    ) -> Result<Document, ApiError> {
        self.put(&resource_path(id, ""), update).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the deletion.
    pub async fn delete_document(&self, id: &str) -> Result<Value, ApiError> {
        self.delete(&resource_path(id, "")).await
    }

    /// Structured FIR details (complainant, accused, sections, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn document_details(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&resource_path(id, "/details")).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the update.
    pub async fn update_document_details(&self, id: &str, details: &Value) -> Result<Value, ApiError> {
        self.put(&resource_path(id, "/details"), details).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn document_metadata(&self, id: &str) -> Result<Value, ApiError> {
        self.get(&resource_path(id, "/metadata")).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the update.
    pub async fn update_document_metadata(
        &self,
        id: &str,
        metadata: &Value,
    ) -> Result<Value, ApiError> {
        self.put(&resource_path(id, "/metadata"), metadata).await
    }

    /// Upload and persist a PDF in one step, skipping review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read, otherwise any
    /// server or transport error.
    pub async fn upload_document(
        &self,
        file: &Path,
        folder_id: Option<&str>,
        title: Option<&str>,
    ) -> Result<Value, ApiError> {
        let form = pdf_form(file, folder_id, title).await?;
        self.send_multipart("/documents/upload", form).await
    }

    /// Stage a PDF on the server for analysis and review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read, otherwise any
    /// server or transport error.
    pub async fn upload_temp(
        &self,
        file: &Path,
        folder_id: Option<&str>,
        title: Option<&str>,
    ) -> Result<UploadedFile, ApiError> {
        let form = pdf_form(file, folder_id, title).await?;
        let staged: StagedUpload = self.send_multipart("/documents/upload-temp", form).await?;
        Ok(staged.file)
    }

    /// Run OCR and extraction synchronously. Large files may exceed proxy
    /// timeouts; prefer [`Self::submit_analysis`] with the poller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the analysis request fails.
    pub async fn analyze(&self, file_path: &str) -> Result<AnalysisResult, ApiError> {
        let body = AnalyzeRequest {
            file_path: file_path.to_string(),
        };
        self.post("/documents/analyze", &body).await
    }

    /// Start an asynchronous analysis job for a staged file.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the job is not accepted.
    pub async fn submit_analysis(&self, file_path: &str) -> Result<JobHandle, ApiError> {
        let body = AnalyzeRequest {
            file_path: file_path.to_string(),
        };
        self.post("/documents/analyze?async=true", &body).await
    }

    /// One non-blocking status check of an analysis job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the status request fails.
    pub async fn analysis_status(&self, job_id: &str) -> Result<JobReport, ApiError> {
        self.get(&format!("/documents/analyze/{}", segment(job_id)))
            .await
    }

    /// Persist a reviewed upload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server rejects the save.
    pub async fn save_document(&self, request: &SaveRequest) -> Result<Value, ApiError> {
        self.post("/documents/save", request).await
    }

    /// Fetch the original PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the download fails.
    pub async fn download_document(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&resource_path(id, "/download")).await
    }

    /// Download the original PDF to `target`, returning the byte count.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if `target` cannot be written.
    pub async fn download_document_to(&self, id: &str, target: &Path) -> Result<u64, ApiError> {
        let bytes = self.download_document(id).await?;
        tokio::fs::write(target, &bytes).await?;
        Ok(bytes.len() as u64)
    }

    /// Breadcrumb path of a document's containing folder.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if either fetch fails and [`ApiError::Core`] on
    /// cyclic folder data.
    pub async fn document_path(&self, id: &str) -> Result<Vec<Crumb>, ApiError> {
        let (document, folders) = tokio::try_join!(self.get_document(id), self.list_folders(None))?;
        Ok(fir_core::hierarchy::document_path(&document, &folders)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filter_builds_query_in_console_order() {
        let filter = DocumentFilter {
            folder_id: Some("fld-1".into()),
            status: Some(ProcessingStatus::Ready),
            limit: Some(25),
            offset: Some(50),
        };
        assert_eq!(
            filter.path(),
            "/documents?folderId=fld-1&status=ready&limit=25&offset=50"
        );
        assert_eq!(DocumentFilter::default().path(), "/documents");
    }

    #[test]
    fn sub_resource_paths() {
        assert_eq!(resource_path("d1", "/details"), "/documents/d1/details");
        assert_eq!(resource_path("d 1", "/download"), "/documents/d%201/download");
    }

    #[tokio::test]
    async fn pdf_form_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4 test").unwrap();
        let form = pdf_form(file.path(), Some("fld-1"), Some("FIR 1")).await;
        assert!(form.is_ok());
    }

    #[tokio::test]
    async fn pdf_form_missing_file_is_io_error() {
        let err = pdf_form(Path::new("/nonexistent/fir.pdf"), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[test]
    fn parse_status_report() {
        let report: JobReport = crate::http::decode_body(
            "/api/documents/analyze/j1",
            r#"{"status":"done","result":{"value":42}}"#,
        )
        .unwrap();
        assert_eq!(report.result.unwrap()["value"], 42);
    }
}
