use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnalyticsCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `fir analytics`.
pub async fn handle(
    action: &AnalyticsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let summary = match action {
        AnalyticsCommands::Show => ctx.client.chat_analytics().await?,
        AnalyticsCommands::Refresh => {
            let spinner = Progress::spinner("Recomputing analytics");
            let refreshed = ctx.client.refresh_chat_analytics().await;
            spinner.finish_clear();
            refreshed?
        }
    };
    output(&summary, flags.format)
}
