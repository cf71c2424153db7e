use std::path::PathBuf;

use clap::Subcommand;

/// Document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// List documents.
    List {
        #[arg(long)]
        folder: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a document by ID.
    Get { id: String },
    /// Update document fields.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        folder: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        error_text: Option<String>,
    },
    /// Delete a document.
    Delete { id: String },
    /// Show or replace structured FIR details.
    Details {
        id: String,
        /// JSON file replacing the details.
        #[arg(long, value_name = "FILE")]
        set: Option<PathBuf>,
    },
    /// Show or replace extracted metadata.
    Metadata {
        id: String,
        /// JSON file replacing the metadata.
        #[arg(long, value_name = "FILE")]
        set: Option<PathBuf>,
    },
    /// Breadcrumb path of the document's folder.
    Path { id: String },
    /// Download the original PDF.
    Download {
        id: String,
        /// Target file (defaults to `<id>.pdf`).
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}
