mod details;
mod download;
mod get;
mod list;
mod update;

use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DocumentCommands;
use crate::commands::shared::path::PathResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fir document`.
pub async fn handle(
    action: &DocumentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocumentCommands::List {
            folder,
            status,
            offset,
            limit,
        } => {
            list::run(
                folder.as_deref(),
                status.as_deref(),
                *offset,
                *limit,
                ctx,
                flags,
            )
            .await
        }
        DocumentCommands::Get { id } => get::run(id, ctx, flags).await,
        DocumentCommands::Update {
            id,
            title,
            folder,
            status,
            error_text,
        } => {
            update::run(
                id,
                update::Fields {
                    title: title.clone(),
                    folder: folder.clone(),
                    status: status.as_deref(),
                    error_text: error_text.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        DocumentCommands::Delete { id } => {
            let response = ctx.client.delete_document(id).await?;
            output(&json!({ "deleted": id, "response": response }), flags.format)
        }
        DocumentCommands::Details { id, set } => {
            details::run(id, details::Section::Details, set.as_deref(), ctx, flags).await
        }
        DocumentCommands::Metadata { id, set } => {
            details::run(id, details::Section::Metadata, set.as_deref(), ctx, flags).await
        }
        DocumentCommands::Path { id } => {
            let crumbs = ctx.client.document_path(id).await?;
            output(&PathResponse::from(crumbs), flags.format)
        }
        DocumentCommands::Download { id, output } => {
            download::run(id, output.as_deref(), ctx, flags).await
        }
    }
}
