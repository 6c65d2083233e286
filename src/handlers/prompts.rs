use serde_json::{json, Value};

use crate::prompt::{build_prompt, RecommendationArgs};
use crate::protocol::{GetPromptParams, GetPromptResult, McpErrorCode, McpErrorResponse};

pub const RECOMMENDATION_PROMPT: &str = "product_recommendation_prompt";
const RECOMMENDATION_DESCRIPTION: &str = "Generate product recommendations based on customer needs";

/// Handle `prompts/get`.
pub fn get(params: &GetPromptParams) -> Result<GetPromptResult, McpErrorResponse> {
    if params.name != RECOMMENDATION_PROMPT {
        return Err(McpErrorResponse::new(
            McpErrorCode::PromptNotFound,
            format!("Unknown prompt: {}", params.name),
        ));
    }

    let args: RecommendationArgs = match &params.arguments {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            McpErrorResponse::new(
                McpErrorCode::InvalidArguments,
                format!("Invalid arguments for {RECOMMENDATION_PROMPT}: {e}"),
            )
        })?,
        None => RecommendationArgs::default(),
    };

    Ok(GetPromptResult::user_text(
        RECOMMENDATION_DESCRIPTION,
        build_prompt(&args),
    ))
}

/// Result body for `prompts/list`.
pub fn list() -> Value {
    json!({
        "prompts": [
            {
                "name": RECOMMENDATION_PROMPT,
                "description": RECOMMENDATION_DESCRIPTION,
                "arguments": [
                    {
                        "name": "customer_needs",
                        "description": "What the customer described they need",
                        "required": false
                    },
                    {
                        "name": "category",
                        "description": "Product category they're interested in",
                        "required": false
                    },
                    {
                        "name": "size",
                        "description": "Preferred shoe size",
                        "required": false
                    },
                    {
                        "name": "color",
                        "description": "Preferred color",
                        "required": false
                    }
                ]
            }
        ]
    })
}
