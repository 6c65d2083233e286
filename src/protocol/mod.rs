pub mod request;
pub mod response;

pub use request::{
    GetPromptParams, InitializeParams, JsonRpcRequest, ReadResourceParams, RpcId,
    SearchProductsParams, ToolCallParams,
};
pub use response::{
    GetPromptResult, JsonRpcError, JsonRpcResponse, McpError, McpErrorCode, McpErrorResponse,
    PromptMessage, ReadResourceResult, ResourceContents, TextContent, ToolResult,
};
