use fir_core::stats::DashboardStats;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fir dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let library = ctx.client.load_library().await?;
    output(&DashboardStats::from_library(&library), flags.format)
}
