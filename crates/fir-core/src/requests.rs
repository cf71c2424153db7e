//! Request bodies sent to the FIR Intelligence API.
//!
//! Optional fields are omitted from the JSON when unset so partial updates
//! leave untouched columns alone.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::{AnalysisResult, ChatScope, OcrPage};
use crate::enums::ProcessingStatus;

/// Body of `POST /folders`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewFolder {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Body of `PUT /folders/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FolderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl FolderUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.parent_id.is_none()
    }
}

/// Body of `PUT /documents/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DocumentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<ProcessingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

impl DocumentUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.folder_id.is_none()
            && self.title.is_none()
            && self.processing_status.is_none()
            && self.error_text.is_none()
    }
}

/// Body of `POST /documents/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub file_path: String,
}

/// OCR payload persisted alongside a reviewed document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OcrData {
    pub text: String,
    pub pages: Vec<OcrPage>,
    pub total_pages: u32,
    #[serde(rename = "extractionConfidence")]
    pub extraction_confidence: f64,
}

impl From<&AnalysisResult> for OcrData {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            text: result.ocr.text.clone(),
            pages: result.ocr.pages.clone(),
            total_pages: result.ocr.total_pages,
            extraction_confidence: result.extraction_confidence,
        }
    }
}

/// Body of `POST /documents/save`, the final step of the upload wizard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub file_path: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    pub metadata: Map<String, Value>,
    pub ocr_data: OcrData,
}

/// Body of `POST /search/vector`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorSearchRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Body of `POST /chat/conversations`. A `None` scope is sent as `null` (global).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewConversation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub scope: Option<ChatScope>,
}

/// Body of `POST /chat/conversations/{id}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMessage {
    pub content: String,
    pub context: MessageContext,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageContext {
    pub scope: Option<ChatScope>,
}
