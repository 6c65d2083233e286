use super::model::{SearchResult, StockLine};
use super::{normalize_category, Catalog};

/// Optional search filters. `None` means "match everything" for that field;
/// `Some("")` is a real filter value and matches only empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    fn admits(&self, line: &StockLine) -> bool {
        if let Some(size) = &self.size {
            if line.size != *size {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if line.color.to_lowercase() != color.to_lowercase() {
                return false;
            }
        }
        true
    }
}

impl Catalog {
    /// Run the category → size → color pipeline.
    ///
    /// Products come back in catalog order. A product is emitted only when at
    /// least one of its stock lines survives the size and color filters;
    /// products without an inventory entry count as having no stock.
    pub fn search(&self, filter: &SearchFilter) -> Vec<SearchResult> {
        let category = filter.category.as_deref().map(normalize_category);

        self.products()
            .iter()
            .filter(|product| match &category {
                Some(wanted) => product.category.to_lowercase() == *wanted,
                None => true,
            })
            .filter_map(|product| {
                let options: Vec<StockLine> = self
                    .stock_for(&product.product_id)
                    .iter()
                    .filter(|line| filter.admits(line))
                    .cloned()
                    .collect();

                if options.is_empty() {
                    None
                } else {
                    Some(SearchResult::new(product, options))
                }
            })
            .collect()
    }
}
