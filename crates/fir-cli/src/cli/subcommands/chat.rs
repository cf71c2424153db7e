use clap::Subcommand;

/// Chat commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Start a conversation, optionally scoped to folders or documents.
    New {
        #[arg(long)]
        folder: Vec<String>,
        #[arg(long)]
        document: Vec<String>,
    },
    /// List conversations.
    List,
    /// Show a conversation with its messages.
    Get { id: String },
    /// Send a message and print the reply.
    Send {
        conversation: String,
        message: String,
        #[arg(long)]
        folder: Vec<String>,
        #[arg(long)]
        document: Vec<String>,
    },
}
