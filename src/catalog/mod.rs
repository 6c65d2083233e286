//! In-memory product catalog and inventory.
//!
//! A [`Catalog`] is built once at startup, either from the embedded default
//! table or from a JSON data file, and is read-only afterwards. Every query
//! recomputes its answer from the stores; nothing is cached between calls.

mod model;
mod search;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::schema::{validate_value, SchemaValidationError};

pub use model::{Product, SearchResult, StockLine};
pub use search::SearchFilter;

const DEFAULT_CATALOG: &str = include_str!("default_catalog.json");
const CATALOG_SCHEMA: &str = include_str!("catalog.schema.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog does not match schema: {0}")]
    Schema(#[from] SchemaValidationError),
    #[error("Duplicate product_id in catalog: {0}")]
    DuplicateProduct(String),
    #[error("Stock quantities for {0} overflow the total")]
    StockOverflow(String),
}

/// On-disk shape of a catalog data file.
#[derive(Debug, Deserialize)]
struct CatalogData {
    products: Vec<Product>,
    #[serde(default)]
    inventory: BTreeMap<String, Vec<StockLine>>,
}

/// Catalog store plus inventory store.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    inventory: BTreeMap<String, Vec<StockLine>>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// Fails when two products share a `product_id` or when the quantities of
    /// one inventory entry do not fit a `u64` total. Inventory entries for ids
    /// that are not in the catalog are kept but can never surface in a search.
    pub fn new(
        products: Vec<Product>,
        inventory: BTreeMap<String, Vec<StockLine>>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.product_id.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.product_id.clone()));
            }
        }

        for (product_id, lines) in &inventory {
            if !seen.contains(product_id.as_str()) {
                tracing::warn!(%product_id, "inventory entry has no matching product");
            }
            // Bounds every filtered `total_available`.
            let total = lines
                .iter()
                .try_fold(0u64, |acc, line| acc.checked_add(line.quantity));
            if total.is_none() {
                return Err(CatalogError::StockOverflow(product_id.clone()));
            }
        }

        Ok(Self {
            products,
            inventory,
        })
    }

    /// The four-product sneaker catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(DEFAULT_CATALOG)
    }

    /// Load from `path` when given, otherwise fall back to [`Catalog::builtin`].
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse and schema-check a catalog data document.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: Value = serde_json::from_str(raw)?;
        let schema: Value = serde_json::from_str(CATALOG_SCHEMA)?;
        validate_value(&schema, &document)?;

        let data: CatalogData = serde_json::from_value(document)?;
        Self::new(data.products, data.inventory)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Stock lines for a product; empty when it has no inventory entry.
    pub fn stock_for(&self, product_id: &str) -> &[StockLine] {
        self.inventory
            .get(product_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct category values, ascending.
    pub fn categories(&self) -> BTreeSet<String> {
        self.products
            .iter()
            .map(|product| product.category.clone())
            .collect()
    }

    /// Products whose lower-cased category equals the normalized `category`,
    /// in catalog order.
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        let wanted = normalize_category(category);
        self.products
            .iter()
            .filter(|product| product.category.to_lowercase() == wanted)
            .collect()
    }
}

/// Lower-case and trim a category key for comparison.
pub fn normalize_category(category: &str) -> String {
    category.to_lowercase().trim().to_string()
}
