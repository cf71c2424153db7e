use anyhow::{Context, bail};
use fir_client::{AnalyzeMode, UploadWizard};
use serde_json::{Map, Value, json};
use tokio_util::sync::CancellationToken;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UploadArgs;
use crate::commands::shared::json::read_object;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `fir upload`.
pub async fn handle(args: &UploadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.file.is_file() {
        bail!("'{}' is not a file", args.file.display());
    }
    if args.direct {
        return upload_direct(args, ctx, flags).await;
    }

    // Read overrides before any network work so a bad file fails fast.
    let overrides = review_overrides(args)?;

    let cancel = CancellationToken::new();
    let ctrl_c = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let result = run_wizard(args, overrides, &cancel, ctx).await;
    ctrl_c.abort();
    output(&result?, flags.format)
}

async fn run_wizard(
    args: &UploadArgs,
    overrides: Map<String, Value>,
    cancel: &CancellationToken,
    ctx: &AppContext,
) -> anyhow::Result<Value> {
    let mode = if args.sync {
        AnalyzeMode::Sync
    } else {
        AnalyzeMode::Async
    };
    let mut wizard = UploadWizard::new(&ctx.client, ctx.poller)
        .with_folder(args.folder.clone())
        .with_mode(mode);

    let spinner = Progress::spinner(&format!("Uploading {}", args.file.display()));
    if let Err(error) = wizard.stage(&args.file).await {
        spinner.finish_err("Upload failed");
        return Err(error).context("upload failed");
    }

    spinner.set_message("Extracting text and metadata...");
    let pages = match wizard.analyze(cancel).await {
        Ok(analysis) => analysis.ocr.total_pages,
        Err(error) => {
            spinner.finish_err("Analysis failed");
            return Err(error.into());
        }
    };

    wizard.review(overrides)?;

    spinner.set_message("Saving");
    let saved = match wizard.save().await {
        Ok(saved) => saved,
        Err(error) => {
            spinner.finish_err("Save failed");
            return Err(error).context("save failed");
        }
    };
    let request = wizard.save_request()?;
    spinner.finish_ok(&format!("Saved '{}'", request.title));

    Ok(json!({
        "step": wizard.step().to_string(),
        "title": request.title,
        "folder_id": request.folder_id,
        "pages": pages,
        "document": saved,
    }))
}

async fn upload_direct(args: &UploadArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.metadata.is_some() {
        bail!("--metadata needs the review step; drop --direct");
    }
    let spinner = Progress::spinner(&format!("Uploading {}", args.file.display()));
    let uploaded = ctx
        .client
        .upload_document(&args.file, args.folder.as_deref(), args.title.as_deref())
        .await;
    match uploaded {
        Ok(document) => {
            spinner.finish_clear();
            output(&document, flags.format)
        }
        Err(error) => {
            spinner.finish_err("Upload failed");
            Err(error).context("upload failed")
        }
    }
}

/// Metadata file contents with `--title` layered on top.
fn review_overrides(args: &UploadArgs) -> anyhow::Result<Map<String, Value>> {
    let mut overrides = match &args.metadata {
        Some(path) => read_object(path)?,
        None => Map::new(),
    };
    if let Some(title) = args.title.as_deref().filter(|t| !t.trim().is_empty()) {
        overrides.insert("title".into(), Value::String(title.to_string()));
    }
    Ok(overrides)
}
