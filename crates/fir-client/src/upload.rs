//! Upload wizard: stage a PDF, analyze it, review the extracted metadata,
//! and save the reviewed document.
//!
//! ```text
//! Upload ──stage──→ Upload (file staged)
//!        ──analyze─→ Processing ──ok──→ Review ──save──→ Saved
//!                               └─err─→ Upload
//! ```
//!
//! Staging or analysis failures return the wizard to [`WizardStep::Upload`]
//! with a displayable message. A save failure keeps the wizard on
//! [`WizardStep::Review`] so the save can be retried.

use std::fmt;
use std::future::Future;
use std::path::Path;

use fir_core::CoreError;
use fir_core::entities::{AnalysisResult, UploadedFile};
use fir_core::requests::{OcrData, SaveRequest};
use serde_json::{Map, Value, json};
use tokio_util::sync::CancellationToken;

use crate::{AnalysisJobs, ApiClient, JobPoller, error::ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Upload,
    Processing,
    Review,
    Saved,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Upload => "upload",
            Self::Processing => "processing",
            Self::Review => "review",
            Self::Saved => "saved",
        })
    }
}

/// How the staged file is analyzed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalyzeMode {
    /// Submit a job and poll for its result.
    #[default]
    Async,
    /// Single blocking request.
    Sync,
}

/// Server calls the wizard makes on top of the analysis job pair.
pub trait UploadService: AnalysisJobs + Sync {
    /// Stage a PDF for analysis (`upload-temp`).
    fn stage_file(
        &self,
        file: &Path,
        folder_id: Option<&str>,
        title: Option<&str>,
    ) -> impl Future<Output = Result<UploadedFile, ApiError>> + Send;

    /// Blocking analysis of a staged file.
    fn analyze_now(
        &self,
        file_path: &str,
    ) -> impl Future<Output = Result<AnalysisResult, ApiError>> + Send;

    /// Persist the reviewed document.
    fn save_reviewed(
        &self,
        request: &SaveRequest,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

impl UploadService for ApiClient {
    async fn stage_file(
        &self,
        file: &Path,
        folder_id: Option<&str>,
        title: Option<&str>,
    ) -> Result<UploadedFile, ApiError> {
        self.upload_temp(file, folder_id, title).await
    }

    async fn analyze_now(&self, file_path: &str) -> Result<AnalysisResult, ApiError> {
        self.analyze(file_path).await
    }

    async fn save_reviewed(&self, request: &SaveRequest) -> Result<Value, ApiError> {
        self.save_document(request).await
    }
}

/// Review form defaults; extracted metadata is layered on top.
fn initial_metadata() -> Map<String, Value> {
    let mut form = Map::new();
    form.insert("acts".into(), json!([]));
    form.insert("sections".into(), json!([]));
    form.insert("informant".into(), json!({"name": "", "phone": "", "addr": ""}));
    form
}

/// Pre-fill the review form from extracted metadata. `acts` and `sections`
/// must be arrays and `informant` an object; anything else is replaced by the
/// form default.
#[must_use]
pub fn prefill_metadata(extracted: &Map<String, Value>) -> Map<String, Value> {
    let mut form = initial_metadata();
    for (key, value) in extracted {
        let keep = match key.as_str() {
            "acts" | "sections" => value.is_array(),
            "informant" => value.is_object(),
            _ => true,
        };
        if keep {
            form.insert(key.clone(), value.clone());
        }
    }
    form
}

/// Document title for a save: the reviewed `title` when it is a non-empty
/// string, otherwise the uploaded file's original name.
#[must_use]
pub fn resolve_title(metadata: &Map<String, Value>, file: &UploadedFile) -> String {
    metadata
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.is_empty())
        .unwrap_or(&file.originalname)
        .to_string()
}

/// Stateful upload pipeline bound to one service.
#[derive(Debug)]
pub struct UploadWizard<'a, S = ApiClient> {
    service: &'a S,
    poller: JobPoller,
    mode: AnalyzeMode,
    folder_id: Option<String>,
    step: WizardStep,
    uploaded: Option<UploadedFile>,
    analysis: Option<AnalysisResult>,
    metadata: Map<String, Value>,
    error: Option<String>,
}

impl<'a, S: UploadService> UploadWizard<'a, S> {
    #[must_use]
    pub fn new(service: &'a S, poller: JobPoller) -> Self {
        Self {
            service,
            poller,
            mode: AnalyzeMode::default(),
            folder_id: None,
            step: WizardStep::Upload,
            uploaded: None,
            analysis: None,
            metadata: initial_metadata(),
            error: None,
        }
    }

    /// Target folder for the saved document (root when `None`).
    #[must_use]
    pub fn with_folder(mut self, folder_id: Option<String>) -> Self {
        self.folder_id = folder_id.filter(|id| !id.is_empty());
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: AnalyzeMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Message from the last failed step, cleared when a step starts.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn uploaded(&self) -> Option<&UploadedFile> {
        self.uploaded.as_ref()
    }

    #[must_use]
    pub const fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Current review form contents.
    #[must_use]
    pub const fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Stage `file` on the server. The wizard stays on the upload step.
    ///
    /// # Errors
    ///
    /// Returns the staging error; its message is also kept in [`Self::error`].
    pub async fn stage(&mut self, file: &Path) -> Result<&UploadedFile, ApiError> {
        self.error = None;
        let title = file.file_name().map(|name| name.to_string_lossy().into_owned());
        let staged = self
            .service
            .stage_file(file, self.folder_id.as_deref(), title.as_deref())
            .await;
        match staged {
            Ok(staged) => {
                tracing::info!(path = %staged.path, size = staged.size, "file staged");
                self.step = WizardStep::Upload;
                self.analysis = None;
                Ok(self.uploaded.insert(staged))
            }
            Err(error) => Err(self.fail(WizardStep::Upload, error)),
        }
    }

    /// Analyze the staged file and pre-fill the review form.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Core`] when nothing is staged, otherwise the
    /// analysis error. The wizard falls back to the upload step.
    pub async fn analyze(&mut self, cancel: &CancellationToken) -> Result<&AnalysisResult, ApiError> {
        let Some(file_path) = self.uploaded.as_ref().map(|file| file.path.clone()) else {
            return Err(self.fail(WizardStep::Upload, nothing_staged()));
        };
        self.error = None;
        self.step = WizardStep::Processing;

        let outcome = match self.mode {
            AnalyzeMode::Async => self
                .poller
                .run(self.service, &file_path, cancel)
                .await
                .and_then(|job| {
                    serde_json::from_value::<AnalysisResult>(job.result)
                        .map_err(|e| ApiError::Decode(format!("analysis result: {e}")))
                }),
            AnalyzeMode::Sync => self.service.analyze_now(&file_path).await,
        };

        match outcome {
            Ok(result) => {
                for warning in &result.warnings {
                    tracing::warn!(%warning, "analysis warning");
                }
                self.metadata = prefill_metadata(&result.metadata);
                self.step = WizardStep::Review;
                Ok(self.analysis.insert(result))
            }
            Err(error) => Err(self.fail(WizardStep::Upload, error)),
        }
    }

    /// Merge reviewer edits over the pre-filled form. Keys present in
    /// `overrides` replace the extracted values.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Core`] unless the wizard is on the review step.
    pub fn review(&mut self, overrides: Map<String, Value>) -> Result<(), ApiError> {
        if self.step != WizardStep::Review {
            return Err(not_in_review(self.step));
        }
        self.metadata.extend(overrides);
        Ok(())
    }

    /// Body of the final save.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Core`] unless a file is staged and analyzed.
    pub fn save_request(&self) -> Result<SaveRequest, ApiError> {
        let (Some(file), Some(analysis)) = (&self.uploaded, &self.analysis) else {
            return Err(not_in_review(self.step));
        };
        Ok(SaveRequest {
            file_path: file.path.clone(),
            title: resolve_title(&self.metadata, file),
            folder_id: self.folder_id.clone(),
            metadata: self.metadata.clone(),
            ocr_data: OcrData::from(analysis),
        })
    }

    /// Persist the reviewed document.
    ///
    /// # Errors
    ///
    /// Returns the save error; the wizard stays on the review step.
    pub async fn save(&mut self) -> Result<Value, ApiError> {
        let request = self.save_request()?;
        self.error = None;
        match self.service.save_reviewed(&request).await {
            Ok(saved) => {
                tracing::info!(title = %request.title, "document saved");
                self.step = WizardStep::Saved;
                Ok(saved)
            }
            Err(error) => Err(self.fail(WizardStep::Review, error)),
        }
    }

    fn fail(&mut self, step: WizardStep, error: ApiError) -> ApiError {
        tracing::warn!(%step, %error, "upload step failed");
        self.step = step;
        self.error = Some(error.to_string());
        error
    }
}

fn nothing_staged() -> ApiError {
    ApiError::Core(CoreError::Validation("no file has been staged".into()))
}

fn not_in_review(step: WizardStep) -> ApiError {
    ApiError::Core(CoreError::Validation(format!(
        "upload is at the {step} step; analyze it before review"
    )))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use fir_core::entities::{JobError, JobReport, OcrPage, OcrText};
    use fir_core::enums::JobStatus;
    use pretty_assertions::assert_eq;

    use super::*;

    /// In-memory backend: stages a fixed file, replays job reports, and
    /// records saves.
    struct ScriptedBackend {
        reports: Mutex<VecDeque<JobReport>>,
        saved: Mutex<Vec<SaveRequest>>,
        reject_saves: AtomicBool,
    }

    impl ScriptedBackend {
        fn new(reports: Vec<JobReport>) -> Self {
            Self {
                reports: Mutex::new(reports.into()),
                saved: Mutex::new(Vec::new()),
                reject_saves: AtomicBool::new(false),
            }
        }

        fn saved(&self) -> Vec<SaveRequest> {
            self.saved.lock().unwrap().clone()
        }
    }

    impl AnalysisJobs for ScriptedBackend {
        async fn submit(&self, file_path: &str) -> Result<String, ApiError> {
            assert_eq!(file_path, "uploads/tmp/1730-fir.pdf");
            Ok("job-7".to_string())
        }

        async fn status(&self, job_id: &str) -> Result<JobReport, ApiError> {
            assert_eq!(job_id, "job-7");
            Ok(self.reports.lock().unwrap().pop_front().unwrap_or(JobReport {
                status: JobStatus::Pending,
                result: None,
                error: None,
            }))
        }
    }

    impl UploadService for ScriptedBackend {
        async fn stage_file(
            &self,
            _file: &Path,
            folder_id: Option<&str>,
            title: Option<&str>,
        ) -> Result<UploadedFile, ApiError> {
            assert_eq!(folder_id, Some("fld-pune"));
            assert_eq!(title, Some("fir-101-2025.pdf"));
            Ok(staged())
        }

        async fn analyze_now(&self, _file_path: &str) -> Result<AnalysisResult, ApiError> {
            Ok(analysis(json!({"district": "Pune"})))
        }

        async fn save_reviewed(&self, request: &SaveRequest) -> Result<Value, ApiError> {
            if self.reject_saves.load(Ordering::SeqCst) {
                return Err(ApiError::Api {
                    status: 500,
                    message: "Database unavailable".into(),
                });
            }
            self.saved.lock().unwrap().push(request.clone());
            Ok(json!({"id": "doc-1", "title": request.title}))
        }
    }

    fn report(status: JobStatus, result: Option<Value>, error: Option<&str>) -> JobReport {
        JobReport {
            status,
            result,
            error: error.map(|message| JobError::Message(message.to_string())),
        }
    }

    fn staged() -> UploadedFile {
        UploadedFile {
            path: "uploads/tmp/1730-fir.pdf".into(),
            originalname: "fir-101-2025.pdf".into(),
            size: 2048,
            mimetype: "application/pdf".into(),
        }
    }

    fn analysis(metadata: Value) -> AnalysisResult {
        AnalysisResult {
            success: true,
            ocr: OcrText {
                text: "FIRST INFORMATION REPORT".into(),
                pages: vec![OcrPage {
                    page_num: 1,
                    text: "FIRST INFORMATION REPORT".into(),
                    ocr_confidence: 0.93,
                }],
                total_pages: 1,
                avg_confidence: 0.93,
            },
            metadata: metadata.as_object().cloned().unwrap_or_default(),
            extraction_confidence: 0.81,
            warnings: vec![],
        }
    }

    fn offline_client() -> ApiClient {
        ApiClient::with_http(reqwest::Client::new(), "http://127.0.0.1:9")
    }

    fn in_review<'a>(client: &'a ApiClient, metadata: Value) -> UploadWizard<'a> {
        let mut wizard = UploadWizard::new(client, JobPoller::default())
            .with_folder(Some("fld-pune".into()));
        wizard.uploaded = Some(staged());
        wizard.analysis = Some(analysis(metadata.clone()));
        wizard.metadata = prefill_metadata(metadata.as_object().unwrap());
        wizard.step = WizardStep::Review;
        wizard
    }

    #[test]
    fn prefill_keeps_valid_fields_and_defaults_the_rest() {
        let extracted = json!({
            "fir_number": "101/2025",
            "acts": "BNS",
            "sections": ["303"],
            "informant": null,
        });
        let form = prefill_metadata(extracted.as_object().unwrap());
        assert_eq!(form["fir_number"], "101/2025");
        assert_eq!(form["acts"], json!([]));
        assert_eq!(form["sections"], json!(["303"]));
        assert_eq!(form["informant"], json!({"name": "", "phone": "", "addr": ""}));
    }

    #[test]
    fn title_falls_back_to_original_name() {
        let file = staged();
        let mut metadata = Map::new();
        assert_eq!(resolve_title(&metadata, &file), "fir-101-2025.pdf");

        metadata.insert("title".into(), json!(""));
        assert_eq!(resolve_title(&metadata, &file), "fir-101-2025.pdf");

        metadata.insert("title".into(), json!("Theft at Kothrud market"));
        assert_eq!(resolve_title(&metadata, &file), "Theft at Kothrud market");
    }

    #[test]
    fn review_overrides_extracted_values() {
        let client = offline_client();
        let mut wizard = in_review(&client, json!({"district": "Pune", "title": "FIR 101"}));
        let overrides = json!({"title": "FIR 101/2025 (corrected)", "police_station": "Kothrud"});
        wizard
            .review(overrides.as_object().cloned().unwrap())
            .unwrap();

        let request = wizard.save_request().unwrap();
        assert_eq!(request.title, "FIR 101/2025 (corrected)");
        assert_eq!(request.folder_id.as_deref(), Some("fld-pune"));
        assert_eq!(request.file_path, "uploads/tmp/1730-fir.pdf");
        assert_eq!(request.metadata["district"], "Pune");
        assert_eq!(request.metadata["police_station"], "Kothrud");
        assert_eq!(request.ocr_data.total_pages, 1);
        assert!((request.ocr_data.extraction_confidence - 0.81).abs() < f64::EPSILON);
    }

    #[test]
    fn review_requires_analysis() {
        let client = offline_client();
        let mut wizard = UploadWizard::new(&client, JobPoller::default());
        assert!(wizard.review(Map::new()).is_err());
        assert!(wizard.save_request().is_err());
    }

    #[tokio::test]
    async fn analyze_without_staged_file_fails() {
        let client = offline_client();
        let mut wizard = UploadWizard::new(&client, JobPoller::default());
        let err = wizard.analyze(&CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::Validation(_))));
        assert_eq!(wizard.step(), WizardStep::Upload);
        assert_eq!(wizard.error(), Some("Validation error: no file has been staged"));
    }

    #[tokio::test]
    async fn failed_staging_reports_error_on_upload_step() {
        let client = offline_client();
        let mut wizard = UploadWizard::new(&client, JobPoller::default());
        let err = wizard
            .stage(Path::new("/nonexistent/fir.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
        assert_eq!(wizard.step(), WizardStep::Upload);
        assert!(wizard.error().is_some());
        assert!(wizard.uploaded().is_none());
    }

    #[tokio::test]
    async fn failed_analysis_returns_to_upload() {
        let client = offline_client();
        let mut wizard = UploadWizard::new(&client, JobPoller::default()).with_mode(AnalyzeMode::Sync);
        wizard.uploaded = Some(staged());

        let err = wizard.analyze(&CancellationToken::new()).await.unwrap_err();
        assert!(err.is_transient());
        assert_eq!(wizard.step(), WizardStep::Upload);
        assert!(wizard.analysis().is_none());
    }

    #[tokio::test]
    async fn failed_save_stays_in_review() {
        let client = offline_client();
        let mut wizard = in_review(&client, json!({}));
        assert!(wizard.save().await.is_err());
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(wizard.error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn stages_analyzes_reviews_and_saves() {
        let extracted = json!({
            "success": true,
            "ocr": {
                "text": "FIRST INFORMATION REPORT",
                "pages": [{"page_num": 1, "text": "FIRST INFORMATION REPORT", "ocr_confidence": 0.9}],
                "total_pages": 1,
                "avg_confidence": 0.9
            },
            "metadata": {"fir_number": "101/2025", "acts": ["BNS"], "informant": "unknown"},
            "extractionConfidence": 0.7,
            "warnings": []
        });
        let backend = ScriptedBackend::new(vec![
            report(JobStatus::Pending, None, None),
            report(JobStatus::Done, Some(extracted), None),
        ]);
        let mut wizard =
            UploadWizard::new(&backend, JobPoller::default()).with_folder(Some("fld-pune".into()));

        wizard
            .stage(Path::new("/scans/fir-101-2025.pdf"))
            .await
            .unwrap();
        assert_eq!(wizard.step(), WizardStep::Upload);

        let started = tokio::time::Instant::now();
        let pages = wizard
            .analyze(&CancellationToken::new())
            .await
            .unwrap()
            .ocr
            .total_pages;
        assert_eq!(pages, 1);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_secs(3));
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.metadata()["fir_number"], "101/2025");
        assert_eq!(wizard.metadata()["acts"], json!(["BNS"]));
        assert_eq!(wizard.metadata()["sections"], json!([]));
        assert_eq!(
            wizard.metadata()["informant"],
            json!({"name": "", "phone": "", "addr": ""})
        );

        let overrides = json!({"title": "Chain snatching, Kothrud"});
        wizard.review(overrides.as_object().cloned().unwrap()).unwrap();
        let saved = wizard.save().await.unwrap();
        assert_eq!(saved["id"], "doc-1");
        assert_eq!(wizard.step(), WizardStep::Saved);

        let requests = backend.saved();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].title, "Chain snatching, Kothrud");
        assert_eq!(requests[0].folder_id.as_deref(), Some("fld-pune"));
        assert_eq!(requests[0].file_path, "uploads/tmp/1730-fir.pdf");
        assert_eq!(requests[0].ocr_data.total_pages, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn null_metadata_reaches_review_with_form_defaults() {
        let extracted = json!({
            "success": true,
            "ocr": {"text": "", "pages": [], "total_pages": 1, "avg_confidence": 0.0},
            "metadata": null,
            "extractionConfidence": 0.0,
            "warnings": ["no fields extracted"]
        });
        let backend = ScriptedBackend::new(vec![report(JobStatus::Done, Some(extracted), None)]);
        let mut wizard =
            UploadWizard::new(&backend, JobPoller::default()).with_folder(Some("fld-pune".into()));
        wizard
            .stage(Path::new("/scans/fir-101-2025.pdf"))
            .await
            .unwrap();

        wizard.analyze(&CancellationToken::new()).await.unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(*wizard.metadata(), initial_metadata());
        assert_eq!(wizard.save_request().unwrap().title, "fir-101-2025.pdf");
    }

    #[tokio::test(start_paused = true)]
    async fn job_failure_returns_to_upload_with_server_message() {
        let backend = ScriptedBackend::new(vec![report(
            JobStatus::Error,
            None,
            Some("Unreadable scan"),
        )]);
        let mut wizard =
            UploadWizard::new(&backend, JobPoller::default()).with_folder(Some("fld-pune".into()));
        wizard
            .stage(Path::new("/scans/fir-101-2025.pdf"))
            .await
            .unwrap();

        let err = wizard.analyze(&CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::JobFailed { .. }));
        assert_eq!(wizard.step(), WizardStep::Upload);
        assert_eq!(wizard.error(), Some("Unreadable scan"));
        assert!(wizard.analysis().is_none());
    }

    #[tokio::test]
    async fn rejected_save_can_be_retried() {
        let backend = ScriptedBackend::new(vec![]);
        let mut wizard = UploadWizard::new(&backend, JobPoller::default())
            .with_folder(Some("fld-pune".into()))
            .with_mode(AnalyzeMode::Sync);
        wizard
            .stage(Path::new("/scans/fir-101-2025.pdf"))
            .await
            .unwrap();
        wizard.analyze(&CancellationToken::new()).await.unwrap();

        backend.reject_saves.store(true, Ordering::SeqCst);
        let err = wizard.save().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.error(), Some("Database unavailable"));

        backend.reject_saves.store(false, Ordering::SeqCst);
        wizard.save().await.unwrap();
        assert_eq!(wizard.step(), WizardStep::Saved);
        assert_eq!(backend.saved()[0].metadata["district"], "Pune");
    }
}
