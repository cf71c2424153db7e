use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fir` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fir",
    version,
    about = "FIR Desk - browse, upload, search, and chat over FIR documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress spinners: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,

    /// API server base URL (overrides config and FIR_API__BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{DocumentCommands, FolderCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "fir",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["fir", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["fir", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn base_url_override_is_carried_into_flags() {
        let cli = Cli::try_parse_from([
            "fir",
            "folder",
            "list",
            "--base-url",
            "https://fir.example.org",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("https://fir.example.org"));
        assert!(matches!(
            cli.command,
            Commands::Folder {
                action: FolderCommands::List { .. }
            }
        ));
    }

    #[test]
    fn upload_flags_parse() {
        let cli = Cli::try_parse_from([
            "fir",
            "upload",
            "fir-101.pdf",
            "--folder",
            "fld-1",
            "--sync",
        ])
        .expect("cli should parse");
        let Commands::Upload(args) = cli.command else {
            panic!("expected upload command");
        };
        assert_eq!(args.file.to_string_lossy(), "fir-101.pdf");
        assert_eq!(args.folder.as_deref(), Some("fld-1"));
        assert!(args.sync);
        assert!(!args.direct);
    }

    #[test]
    fn sync_and_direct_conflict() {
        let parsed = Cli::try_parse_from(["fir", "upload", "a.pdf", "--sync", "--direct"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn document_update_accepts_status() {
        let cli = Cli::try_parse_from([
            "fir",
            "document",
            "update",
            "doc-1",
            "--status",
            "ready",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Document {
                action: DocumentCommands::Update { .. }
            }
        ));
    }
}
