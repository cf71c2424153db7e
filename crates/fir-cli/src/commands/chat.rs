mod new;
mod send;

use fir_core::entities::Conversation;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConversationListResponse {
    conversations: Vec<Conversation>,
}

/// Handle `fir chat`.
pub async fn handle(action: &ChatCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ChatCommands::New { folder, document } => {
            new::run(folder.clone(), document.clone(), ctx, flags).await
        }
        ChatCommands::List => {
            let mut conversations = ctx.client.list_conversations(user_id(ctx)).await?;
            if let Some(limit) = flags.limit {
                conversations.truncate(usize::try_from(limit)?);
            }
            output(&ConversationListResponse { conversations }, flags.format)
        }
        ChatCommands::Get { id } => {
            let conversation = ctx.client.get_conversation(id).await?;
            output(&conversation, flags.format)
        }
        ChatCommands::Send {
            conversation,
            message,
            folder,
            document,
        } => {
            send::run(
                conversation,
                message,
                folder.clone(),
                document.clone(),
                ctx,
                flags,
            )
            .await
        }
    }
}

/// Configured `[general] user_id`, if any.
fn user_id(ctx: &AppContext) -> Option<&str> {
    Some(ctx.config.general.user_id.as_str()).filter(|id| !id.is_empty())
}
