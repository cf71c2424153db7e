use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.client.delete_folder(id).await?;
    output(&json!({ "deleted": id, "response": response }), flags.format)
}
