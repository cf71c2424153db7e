use fir_core::entities::Folder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FolderListResponse {
    folders: Vec<Folder>,
}

pub async fn run(parent: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut folders = ctx.client.list_folders(parent).await?;
    folders.truncate(usize::try_from(effective_limit(None, flags.limit, u32::MAX))?);
    output(&FolderListResponse { folders }, flags.format)
}
