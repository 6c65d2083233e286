use serde_json::{json, Value};

use crate::catalog::Catalog;
use crate::protocol::{McpErrorCode, McpErrorResponse, ReadResourceParams, ReadResourceResult};
use crate::render::{render_categories, render_category_products};

pub const CATEGORIES_URI: &str = "catalog://categories";
const CATALOG_SCHEME: &str = "catalog://";

/// A resource URI this server knows how to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogResource<'a> {
    Categories,
    Category(&'a str),
}

impl<'a> CatalogResource<'a> {
    /// `catalog://categories` wins over the `catalog://{category}` template,
    /// so a category literally named "categories" is unreachable. Template
    /// values are a single non-empty path segment.
    pub fn parse(uri: &'a str) -> Option<Self> {
        if uri == CATEGORIES_URI {
            return Some(Self::Categories);
        }
        let key = uri.strip_prefix(CATALOG_SCHEME)?;
        if key.is_empty() || key.contains('/') {
            return None;
        }
        Some(Self::Category(key))
    }
}

/// Markdown list of every category in the catalog.
pub fn categories_document(catalog: &Catalog) -> String {
    render_categories(&catalog.categories())
}

/// Markdown listing of the products in one category.
pub fn category_document(catalog: &Catalog, category: &str) -> String {
    render_category_products(category, &catalog.products_in_category(category))
}

/// Handle `resources/read`.
pub fn read(
    params: &ReadResourceParams,
    catalog: &Catalog,
) -> Result<ReadResourceResult, McpErrorResponse> {
    let text = match CatalogResource::parse(&params.uri) {
        Some(CatalogResource::Categories) => categories_document(catalog),
        Some(CatalogResource::Category(category)) => category_document(catalog, category),
        None => {
            return Err(McpErrorResponse::new(
                McpErrorCode::ResourceNotFound,
                format!("Unknown resource: {}", params.uri),
            ));
        }
    };

    tracing::debug!(uri = %params.uri, bytes = text.len(), "resource read");
    Ok(ReadResourceResult::markdown(params.uri.clone(), text))
}

/// Result body for `resources/list`.
pub fn list() -> Value {
    json!({
        "resources": [
            {
                "uri": CATEGORIES_URI,
                "name": "product_categories",
                "description": "A simple list of all available product categories",
                "mimeType": "text/markdown"
            }
        ]
    })
}

/// Result body for `resources/templates/list`.
pub fn list_templates() -> Value {
    json!({
        "resourceTemplates": [
            {
                "uriTemplate": "catalog://{category}",
                "name": "product_category",
                "description": "Products in a specific category, with ID, price and description",
                "mimeType": "text/markdown"
            }
        ]
    })
}
