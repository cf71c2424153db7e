use anyhow::bail;
use fir_core::requests::NewFolder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    parent: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let name = name.trim();
    if name.is_empty() {
        bail!("folder name must not be empty");
    }

    let folder = ctx
        .client
        .create_folder(&NewFolder {
            name: name.to_string(),
            parent_id: parent.map(str::to_string),
        })
        .await?;
    output(&folder, flags.format)
}
