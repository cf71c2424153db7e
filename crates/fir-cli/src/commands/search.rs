use fir_client::search::SearchFilters;
use fir_core::enums::ProcessingStatus;
use fir_core::requests::VectorSearchRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SearchCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_optional;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fir search`.
pub async fn handle(
    action: &SearchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.default_limit());
    let response = match action {
        SearchCommands::Query {
            q,
            folder,
            status,
            from,
            to,
            fir_number,
            police_station,
            district,
            acts,
            sections,
            offset,
        } => {
            let filters = SearchFilters {
                q: q.clone(),
                folder_id: folder.clone(),
                status: parse_optional::<ProcessingStatus>(status.as_deref(), "status")?,
                start_date: from.clone(),
                end_date: to.clone(),
                fir_number: fir_number.clone(),
                police_station: police_station.clone(),
                district: district.clone(),
                acts: acts.clone(),
                sections: sections.clone(),
                limit: Some(limit),
                offset: *offset,
            };
            ctx.client.search(&filters).await?
        }
        SearchCommands::Vector {
            query,
            folder,
            document,
            threshold,
        } => {
            let request = VectorSearchRequest {
                query: query.clone(),
                folder_ids: non_empty(folder),
                document_ids: non_empty(document),
                limit: Some(limit),
                threshold: *threshold,
            };
            ctx.client.vector_search(&request).await?
        }
        SearchCommands::Chunks { document, offset } => {
            ctx.client
                .document_chunks(document, Some(limit), *offset)
                .await?
        }
        SearchCommands::Pages { document, page } => {
            ctx.client.document_pages(document, *page).await?
        }
    };
    output(&response, flags.format)
}

fn non_empty(ids: &[String]) -> Option<Vec<String>> {
    (!ids.is_empty()).then(|| ids.to_vec())
}
