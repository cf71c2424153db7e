use anyhow::bail;
use fir_core::requests::FolderUpdate;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    name: Option<String>,
    parent: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if parent.as_deref() == Some(id) {
        bail!("folder '{id}' cannot be its own parent");
    }
    let update = FolderUpdate {
        name,
        parent_id: parent,
    };
    if update.is_empty() {
        bail!("nothing to update: pass --name or --parent");
    }

    let folder = ctx.client.update_folder(id, &update).await?;
    output(&folder, flags.format)
}
