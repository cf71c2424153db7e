use anyhow::bail;
use fir_core::entities::ChatScope;
use fir_core::requests::{MessageContext, NewMessage};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(
    conversation: &str,
    message: &str,
    folders: Vec<String>,
    documents: Vec<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let message = build_message(message, folders, documents)?;

    let spinner = Progress::spinner("Waiting for reply");
    let exchange = ctx.client.send_message(conversation, &message).await;
    spinner.finish_clear();
    let exchange = exchange?;

    if flags.format == OutputFormat::Table {
        println!("{}", exchange.ai_message.content);
        return Ok(());
    }
    output(&exchange, flags.format)
}

fn build_message(
    content: &str,
    folders: Vec<String>,
    documents: Vec<String>,
) -> anyhow::Result<NewMessage> {
    let content = content.trim();
    if content.is_empty() {
        bail!("message must not be empty");
    }
    Ok(NewMessage {
        content: content.to_string(),
        context: MessageContext {
            scope: ChatScope::from_filters(folders, documents),
        },
    })
}
