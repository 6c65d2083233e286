use crate::catalog::{Catalog, SearchResult};
use crate::protocol::{McpErrorCode, McpErrorResponse, SearchProductsParams, ToolResult};

/// Handle a `search_products` tool call.
///
/// The tool text is the JSON array of search results. An unmatched search is
/// `[]`, never an error.
pub fn handle(params: SearchProductsParams, catalog: &Catalog) -> ToolResult {
    let filter = params.into_filter();
    let results = catalog.search(&filter);
    tracing::debug!(?filter, matches = results.len(), "search_products");

    match encode(&results) {
        Ok(json) => ToolResult::text(json),
        Err(mcp_err) => mcp_err.into(),
    }
}

fn encode(results: &[SearchResult]) -> Result<String, McpErrorResponse> {
    serde_json::to_string(results).map_err(|e| {
        tracing::error!("Serialization failed: {e}");
        McpErrorResponse::canonical(McpErrorCode::InternalError)
    })
}
