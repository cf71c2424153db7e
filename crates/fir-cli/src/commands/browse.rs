use fir_core::library::BrowserEntry;
use serde::Serialize;

use crate::cli::root_commands::BrowseArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::path::PathResponse;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct BrowseResponse {
    #[serde(flatten)]
    location: PathResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<String>,
    entries: Vec<BrowserEntry>,
}

/// Handle `fir browse`.
pub async fn handle(args: &BrowseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let library = ctx.client.load_library().await?;
    let crumbs = library.path_to(args.folder.as_deref())?;

    let term = args.term.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let entries = match term {
        Some(term) => library.search(term),
        None => library.children(args.folder.as_deref()),
    };

    let response = BrowseResponse {
        location: PathResponse::from(crumbs),
        term: term.map(str::to_string),
        entries,
    };

    if flags.format == OutputFormat::Table {
        println!("{}", response.location.path);
        return output(&response.entries, flags.format);
    }
    output(&response, flags.format)
}
