use clap::Subcommand;

/// Chat analytics commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnalyticsCommands {
    /// Show the analytics summary.
    Show,
    /// Recompute analytics on the server.
    Refresh,
}
