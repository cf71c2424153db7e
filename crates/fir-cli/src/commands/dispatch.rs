use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Folder { action } => commands::folder::handle(&action, ctx, flags).await,
        Commands::Document { action } => commands::document::handle(&action, ctx, flags).await,
        Commands::Browse(args) => commands::browse::handle(&args, ctx, flags).await,
        Commands::Upload(args) => commands::upload::handle(&args, ctx, flags).await,
        Commands::Search { action } => commands::search::handle(&action, ctx, flags).await,
        Commands::Chat { action } => commands::chat::handle(&action, ctx, flags).await,
        Commands::Analytics { action } => commands::analytics::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
