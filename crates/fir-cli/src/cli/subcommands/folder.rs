use clap::Subcommand;

/// Folder commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FolderCommands {
    /// List folders.
    List {
        /// Only direct children of this folder.
        #[arg(long)]
        parent: Option<String>,
    },
    /// Get a folder by ID.
    Get { id: String },
    /// Create a folder.
    Create {
        name: String,
        #[arg(long)]
        parent: Option<String>,
    },
    /// Rename or move a folder.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        parent: Option<String>,
    },
    /// Delete a folder.
    Delete { id: String },
    /// Breadcrumb path from the root to a folder.
    Path { id: Option<String> },
}
