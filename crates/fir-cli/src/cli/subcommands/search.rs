use clap::Subcommand;

/// Search commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SearchCommands {
    /// Structured full-text search.
    Query {
        /// Free-text query.
        q: Option<String>,
        #[arg(long)]
        folder: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Earliest FIR date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<String>,
        /// Latest FIR date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        fir_number: Option<String>,
        #[arg(long)]
        police_station: Option<String>,
        #[arg(long)]
        district: Option<String>,
        /// Comma-separated act names.
        #[arg(long)]
        acts: Option<String>,
        /// Comma-separated section numbers.
        #[arg(long)]
        sections: Option<String>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Semantic search over document chunks.
    Vector {
        query: String,
        #[arg(long)]
        folder: Vec<String>,
        #[arg(long)]
        document: Vec<String>,
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Indexed chunks of one document.
    Chunks {
        document: String,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// OCR pages of one document.
    Pages {
        document: String,
        #[arg(long)]
        page: Option<u32>,
    },
}
