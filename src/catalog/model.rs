use serde::{Deserialize, Serialize};

/// A sellable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    /// Compared only by case-insensitive equality.
    pub category: String,
    pub price: f64,
}

/// One color/size combination held in stock for a product.
///
/// Sizes are opaque strings: `"9"` and `"9.0"` are different sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub color: String,
    pub size: String,
    pub quantity: u64,
}

/// A product enriched with the stock lines that survived a search.
///
/// Serializes flat: the product fields followed by `available_options` and
/// `total_available`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub product: Product,
    pub available_options: Vec<StockLine>,
    pub total_available: u64,
}

impl SearchResult {
    pub(crate) fn new(product: &Product, available_options: Vec<StockLine>) -> Self {
        let total_available = available_options.iter().map(|line| line.quantity).sum();
        Self {
            product: product.clone(),
            available_options,
            total_available,
        }
    }
}
