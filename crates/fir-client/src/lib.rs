//! # fir-client
//!
//! Typed HTTP client for the FIR Intelligence REST API.
//!
//! Every endpoint lives under `{base_url}/api`. Resources are split by module:
//! - [`folders`]: folder CRUD
//! - [`documents`]: document CRUD, details/metadata, upload, analysis, download
//! - [`search`]: full-text, vector, chunk, and page retrieval
//! - [`chat`]: conversations, messages, analytics
//!
//! On top of the raw resources sit the [`poller`] (submit-then-poll for
//! asynchronous analysis jobs) and the [`upload`] wizard pipeline.
//!
//! The client is an explicit value passed to whoever needs it; there is no
//! process-wide instance.

pub mod chat;
pub mod documents;
pub mod folders;
pub mod poller;
pub mod search;
pub mod upload;

mod error;
mod http;
mod query;

pub use error::ApiError;
pub use poller::{AnalysisJobs, CompletedJob, JobPoller, PollState};
pub use query::Query;
pub use upload::{AnalyzeMode, UploadService, UploadWizard, WizardStep};

use std::time::Duration;

use fir_config::ApiConfig;
use fir_core::library::Library;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode_json};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the FIR Intelligence API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] for an unusable base URL and
    /// [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        config
            .validate()
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self::with_http(http, &config.normalized_base_url()))
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/folders`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    /// Fetch folders and documents together. Either failure fails the load.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] raised by either request.
    pub async fn load_library(&self) -> Result<Library, ApiError> {
        let filter = documents::DocumentFilter::default();
        let (folders, documents) =
            tokio::try_join!(self.list_folders(None), self.list_documents(&filter))?;
        tracing::debug!(
            folders = folders.len(),
            documents = documents.len(),
            "library loaded"
        );
        Ok(Library::new(folders, documents))
    }

    // ── Request plumbing ───────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.send::<(), _>(Method::DELETE, path, None).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%method, path, "api request");
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = request.send().await.inspect_err(|e| {
            tracing::warn!(path, %e, "api request failed");
        })?;
        decode_json(check_response(resp).await?).await
    }

    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "api multipart upload");
        let resp = self.http.post(self.url(path)).multipart(form).send().await?;
        decode_json(check_response(resp).await?).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(path, "api download");
        let resp = check_response(self.http.get(self.url(path)).send().await?).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Percent-encode a path segment (identifiers are opaque strings).
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
