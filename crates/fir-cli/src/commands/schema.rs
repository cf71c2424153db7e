use anyhow::bail;
use schemars::{JsonSchema, Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `fir schema`.
pub const SCHEMA_TYPES: &[&str] = &[
    "folder",
    "document",
    "crumb",
    "browser-entry",
    "analysis-result",
    "job-report",
    "save-request",
    "conversation",
    "chat-message",
    "dashboard-stats",
];

/// Handle `fir schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_named(&args.type_name)?, flags.format)
}

fn schema_named(name: &str) -> anyhow::Result<Schema> {
    use fir_core::entities::{AnalysisResult, ChatMessage, Conversation, Document, Folder, JobReport};
    use fir_core::hierarchy::Crumb;
    use fir_core::library::BrowserEntry;
    use fir_core::requests::SaveRequest;
    use fir_core::stats::DashboardStats;

    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
    Ok(match normalized.as_str() {
        "folder" => of::<Folder>(),
        "document" => of::<Document>(),
        "crumb" => of::<Crumb>(),
        "browser-entry" => of::<BrowserEntry>(),
        "analysis-result" => of::<AnalysisResult>(),
        "job-report" => of::<JobReport>(),
        "save-request" => of::<SaveRequest>(),
        "conversation" => of::<Conversation>(),
        "chat-message" => of::<ChatMessage>(),
        "dashboard-stats" => of::<DashboardStats>(),
        _ => bail!(
            "unknown schema type '{name}'; expected one of: {}",
            SCHEMA_TYPES.join(", ")
        ),
    })
}

fn of<T: JsonSchema>() -> Schema {
    schema_for!(T)
}
