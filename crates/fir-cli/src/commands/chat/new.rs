use fir_core::entities::ChatScope;
use fir_core::requests::NewConversation;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    folders: Vec<String>,
    documents: Vec<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = NewConversation {
        user_id: super::user_id(ctx).map(str::to_string),
        scope: ChatScope::from_filters(folders, documents),
    };
    let conversation = ctx.client.create_conversation(&request).await?;
    output(&conversation, flags.format)
}
