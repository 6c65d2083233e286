//! Markdown views of the catalog.
//!
//! Both renderers are total: missing data becomes an explicit message.

use std::collections::BTreeSet;

use crate::catalog::{normalize_category, Product};

/// `# Available Product Categories` followed by one bullet per category.
pub fn render_categories(categories: &BTreeSet<String>) -> String {
    let mut content = String::from("# Available Product Categories\n\n");
    if categories.is_empty() {
        content.push_str("No categories found.\n");
        return content;
    }
    for category in categories {
        content.push_str(&format!("- {category}\n"));
    }
    content
}

/// Product listing for one category.
///
/// `products` must already be the category-matched subset. The empty message
/// uses the lower-cased category while the listing heading is title-cased.
pub fn render_category_products(category: &str, products: &[&Product]) -> String {
    let category = normalize_category(category);

    if products.is_empty() {
        return format!("# No products found in category: {category}");
    }

    let mut content = format!("# Products in {} Category\n\n", title_case(&category));
    content.push_str(&format!("Total products: {}\n\n", products.len()));

    for product in products {
        content.push_str(&format!("## {}\n", product.name));
        content.push_str(&format!("- **Product ID**: {}\n", product.product_id));
        content.push_str(&format!("- **Price**: ${:.2}\n", product.price));
        content.push_str(&format!("- **Description**: {}\n\n", product.description));
        content.push_str("---\n\n");
    }

    content
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::title_case;

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("trail running"), "Trail Running");
        assert_eq!(title_case("cross-training"), "Cross-Training");
        assert_eq!(title_case("5k road"), "5K Road");
        assert_eq!(title_case(""), "");
    }
}
