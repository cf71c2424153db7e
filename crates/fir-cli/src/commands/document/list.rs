use fir_client::documents::DocumentFilter;
use fir_core::entities::Document;
use fir_core::enums::ProcessingStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DocumentListResponse {
    documents: Vec<Document>,
}

pub async fn run(
    folder: Option<&str>,
    status: Option<&str>,
    offset: Option<u32>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = DocumentFilter {
        folder_id: folder.map(str::to_string),
        status: parse_optional::<ProcessingStatus>(status, "status")?,
        limit: Some(effective_limit(limit, flags.limit, ctx.default_limit())),
        offset,
    };
    let documents = ctx.client.list_documents(&filter).await?;
    output(&DocumentListResponse { documents }, flags.format)
}
