mod create;
mod delete;
mod get;
mod list;
mod path;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FolderCommands;
use crate::context::AppContext;

/// Handle `fir folder`.
pub async fn handle(
    action: &FolderCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FolderCommands::List { parent } => list::run(parent.as_deref(), ctx, flags).await,
        FolderCommands::Get { id } => get::run(id, ctx, flags).await,
        FolderCommands::Create { name, parent } => {
            create::run(name, parent.as_deref(), ctx, flags).await
        }
        FolderCommands::Update { id, name, parent } => {
            update::run(id, name.clone(), parent.clone(), ctx, flags).await
        }
        FolderCommands::Delete { id } => delete::run(id, ctx, flags).await,
        FolderCommands::Path { id } => path::run(id.as_deref(), ctx, flags).await,
    }
}
