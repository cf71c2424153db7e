use anyhow::bail;
use fir_core::enums::ProcessingStatus;
use fir_core::requests::DocumentUpdate;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

/// Raw `fir document update` flags.
pub struct Fields<'a> {
    pub title: Option<String>,
    pub folder: Option<String>,
    pub status: Option<&'a str>,
    pub error_text: Option<String>,
}

pub async fn run(
    id: &str,
    fields: Fields<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(fields)?;
    let document = ctx.client.update_document(id, &update).await?;
    output(&document, flags.format)
}

fn build_update(fields: Fields<'_>) -> anyhow::Result<DocumentUpdate> {
    let update = DocumentUpdate {
        folder_id: fields.folder,
        title: fields.title,
        processing_status: parse_optional::<ProcessingStatus>(fields.status, "status")?,
        error_text: fields.error_text,
    };
    if update.is_empty() {
        bail!("nothing to update: pass --title, --folder, --status, or --error-text");
    }
    Ok(update)
}
