use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AnalyticsCommands, ChatCommands, DocumentCommands, FolderCommands, SearchCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Folder management.
    Folder {
        #[command(subcommand)]
        action: FolderCommands,
    },
    /// Document management.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Show a folder's breadcrumb and contents, or search the library.
    Browse(BrowseArgs),
    /// Upload a PDF, analyze it, and save it.
    Upload(UploadArgs),
    /// Full-text and semantic search.
    Search {
        #[command(subcommand)]
        action: SearchCommands,
    },
    /// Chat over the document corpus.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Chat analytics.
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
    /// Library counters and recent activity.
    Dashboard,
    /// Dump the JSON schema of a wire type.
    Schema(SchemaArgs),
}

/// Arguments for `fir browse`.
#[derive(Clone, Debug, Args)]
pub struct BrowseArgs {
    /// Folder to open (library root when omitted).
    #[arg(long)]
    pub folder: Option<String>,
    /// Filter the whole library by folder name or document title instead.
    #[arg(long)]
    pub term: Option<String>,
}

/// Arguments for `fir upload`.
#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// PDF file to upload.
    pub file: PathBuf,
    /// Destination folder ID (library root when omitted).
    #[arg(long)]
    pub folder: Option<String>,
    /// Document title (defaults to the extracted title, then the file name).
    #[arg(long)]
    pub title: Option<String>,
    /// JSON file with metadata overrides applied during review.
    #[arg(long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,
    /// Analyze with a single blocking request instead of a polled job.
    #[arg(long, conflicts_with = "direct")]
    pub sync: bool,
    /// Upload and save in one step, skipping analysis and review.
    #[arg(long)]
    pub direct: bool,
}

/// Arguments for `fir schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `document` or `save-request`.
    pub type_name: String,
}
