//! Entity structs for the FIR Intelligence API resources.
//!
//! Field names follow the server's JSON exactly (`snake_case` for stored records,
//! `camelCase` for the analysis and chat envelopes). All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod analysis;
mod chat;
mod document;
mod folder;

pub use analysis::{
    AnalysisResult, JobError, JobHandle, JobReport, OcrPage, OcrText, StagedUpload, UploadedFile,
};
pub use chat::{ChatMessage, ChatScope, Conversation, MessageExchange};
pub use document::{Document, FolderSummary};
pub use folder::Folder;
