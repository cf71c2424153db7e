use crate::cli::GlobalFlags;
use crate::commands::shared::path::PathResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let crumbs = ctx.client.folder_path(id).await?;
    output(&PathResponse::from(crumbs), flags.format)
}
