pub mod prompts;
pub mod resources;
pub mod search_products;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, SearchProductsParams,
    ToolCallParams, ToolResult,
};

pub const SEARCH_PRODUCTS_TOOL: &str = "search_products";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub fn dispatch(req: &JsonRpcRequest, catalog: &Catalog) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(Ok(params)) = req
                .params
                .clone()
                .map(serde_json::from_value::<InitializeParams>)
            {
                let (client, client_version) = match params.client_info {
                    Some(info) => (info.name, info.version),
                    None => (None, None),
                };
                tracing::info!(
                    protocol_version = params.protocol_version.as_deref(),
                    client = client.as_deref(),
                    client_version = client_version.as_deref(),
                    "initialize"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "resources": {},
                    "tools": {},
                    "prompts": {}
                },
                "serverInfo": {
                    "name": "mcp-product-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "resources/list" => Some(JsonRpcResponse::success(req.id.clone(), resources::list())),

        "resources/templates/list" => Some(JsonRpcResponse::success(
            req.id.clone(),
            resources::list_templates(),
        )),

        "resources/read" => {
            let params = match parse_params(req) {
                Ok(p) => p,
                Err(resp) => return Some(resp),
            };
            match resources::read(&params, catalog) {
                Ok(result) => Some(success(req, &result)),
                Err(mcp_err) => Some(JsonRpcResponse::error(req.id.clone(), mcp_err.into())),
            }
        }

        "tools/list" => {
            let result = serde_json::json!({
                "tools": [
                    {
                        "name": SEARCH_PRODUCTS_TOOL,
                        "description": "Search for products based on category, size, and color preferences. Returns matching products with their details and availability.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "category": {
                                    "type": "string",
                                    "description": "Product category (Lifestyle, Running, Training)"
                                },
                                "size": {
                                    "type": ["string", "number"],
                                    "description": "Shoe size"
                                },
                                "color": {
                                    "type": "string",
                                    "description": "Preferred color"
                                }
                            }
                        }
                    }
                ]
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match parse_params(req) {
                Ok(p) => p,
                Err(resp) => return Some(resp),
            };

            let tool_result = dispatch_tool_call(&params, catalog);
            Some(success(req, &tool_result))
        }

        "prompts/list" => Some(JsonRpcResponse::success(req.id.clone(), prompts::list())),

        "prompts/get" => {
            let params = match parse_params(req) {
                Ok(p) => p,
                Err(resp) => return Some(resp),
            };
            match prompts::get(&params) {
                Ok(result) => Some(success(req, &result)),
                Err(mcp_err) => Some(JsonRpcResponse::error(req.id.clone(), mcp_err.into())),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

fn dispatch_tool_call(params: &ToolCallParams, catalog: &Catalog) -> ToolResult {
    match params.name.as_str() {
        SEARCH_PRODUCTS_TOOL => {
            // Every filter is optional, so missing arguments mean "match all".
            let search_params: SearchProductsParams = match &params.arguments {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return ToolResult::error(format!(
                            "Invalid arguments for {SEARCH_PRODUCTS_TOOL}: {e}"
                        ));
                    }
                },
                None => SearchProductsParams::default(),
            };
            search_products::handle(search_params, catalog)
        }

        _ => ToolResult::error(format!("Unknown tool: {}", params.name)),
    }
}

fn parse_params<T: DeserializeOwned>(req: &JsonRpcRequest) -> Result<T, JsonRpcResponse> {
    match &req.params {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_params(format!("Invalid {} params: {e}", req.method)),
            )
        }),
        None => Err(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::invalid_params(format!("Missing params for {}", req.method)),
        )),
    }
}

fn success<T: Serialize>(req: &JsonRpcRequest, body: &T) -> JsonRpcResponse {
    match serde_json::to_value(body) {
        Ok(value) => JsonRpcResponse::success(req.id.clone(), value),
        Err(e) => {
            tracing::error!("Serialization failed: {e}");
            JsonRpcResponse::error(req.id.clone(), JsonRpcError::internal_error("Internal error"))
        }
    }
}
