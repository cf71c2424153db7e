use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::enums::JobStatus;

/// A file staged on the server by `upload-temp`, awaiting analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UploadedFile {
    pub path: String,
    pub originalname: String,
    pub size: u64,
    pub mimetype: String,
}

/// Envelope returned by `upload-temp`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StagedUpload {
    pub file: UploadedFile,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OcrPage {
    pub page_num: u32,
    pub text: String,
    pub ocr_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OcrText {
    pub text: String,
    #[serde(default)]
    pub pages: Vec<OcrPage>,
    pub total_pages: u32,
    #[serde(default)]
    pub avg_confidence: f64,
}

/// Output of OCR and field extraction for one staged file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub success: bool,
    pub ocr: OcrText,
    /// Extracted FIR fields, keyed by field name. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Map<String, Value>")]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub extraction_confidence: f64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifier returned when an asynchronous analysis job is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobHandle {
    pub job_id: String,
}

/// One status observation of an asynchronous analysis job.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct JobReport {
    pub status: JobStatus,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JobError>,
}

/// Job failure as reported by the server: either a bare string or `{message}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum JobError {
    Message(String),
    Detail {
        #[serde(default)]
        message: Option<String>,
    },
}

impl JobError {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message.as_str()),
            Self::Detail { message } => message.as_deref(),
        }
        .filter(|message| !message.is_empty())
    }
}

impl JobReport {
    /// Server message for a failed job, with the console's fallback text.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(JobError::message)
            .unwrap_or("Analysis failed")
            .to_string()
    }
}
