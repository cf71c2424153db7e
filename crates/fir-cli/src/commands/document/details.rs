use std::path::Path;

use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::commands::shared::json::read_object;
use crate::context::AppContext;
use crate::output::output;

/// Which per-document JSON object a command reads or replaces.
#[derive(Clone, Copy, Debug)]
pub enum Section {
    Details,
    Metadata,
}

pub async fn run(
    id: &str,
    section: Section,
    replacement: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = match replacement {
        None => match section {
            Section::Details => ctx.client.document_details(id).await?,
            Section::Metadata => ctx.client.document_metadata(id).await?,
        },
        Some(path) => {
            let body = Value::Object(read_object(path)?);
            match section {
                Section::Details => ctx.client.update_document_details(id, &body).await?,
                Section::Metadata => ctx.client.update_document_metadata(id, &body).await?,
            }
        }
    };
    output(&response, flags.format)
}
