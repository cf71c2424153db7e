use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(
    id: &str,
    target: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target = target.map_or_else(|| default_target(id), Path::to_path_buf);

    let spinner = Progress::spinner(&format!("Downloading {id}"));
    let bytes = match ctx.client.download_document_to(id, &target).await {
        Ok(bytes) => bytes,
        Err(error) => {
            spinner.finish_err("Download failed");
            return Err(error).with_context(|| format!("failed to download document '{id}'"));
        }
    };
    spinner.finish_clear();

    output(
        &json!({ "id": id, "path": target.display().to_string(), "bytes": bytes }),
        flags.format,
    )
}

fn default_target(id: &str) -> PathBuf {
    let safe: String = id
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_') { ch } else { '_' })
        .collect();
    PathBuf::from(format!("{safe}.pdf"))
}
