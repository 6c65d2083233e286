//! Golden snapshots of the rendered documents and search output for the
//! built-in catalog.

#[path = "../support/mod.rs"]
mod support;

use std::fs;
use std::path::PathBuf;

use mcp_product_server::catalog::SearchFilter;
use mcp_product_server::handlers::resources::{categories_document, category_document};

fn expected_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden/expected")
        .join(name)
}

fn read_expected(name: &str) -> String {
    fs::read_to_string(expected_path(name)).expect("expected file missing")
}

#[test]
fn golden_categories_document() {
    let catalog = support::builtin();
    assert_eq!(categories_document(&catalog), read_expected("categories.md"));
}

#[test]
fn golden_training_document() {
    let catalog = support::builtin();
    let expected = read_expected("category_training.md");

    assert_eq!(category_document(&catalog, "training"), expected);
    assert_eq!(category_document(&catalog, " Training "), expected);
}

#[test]
fn golden_missing_category_document() {
    let catalog = support::two_product_catalog();
    assert_eq!(
        category_document(&catalog, "training"),
        "# No products found in category: training"
    );
}

#[test]
fn golden_search_output() {
    let catalog = support::builtin();
    let results = catalog.search(&SearchFilter::new().category("TRAINING").size("11"));
    let actual = serde_json::to_string(&results).unwrap();

    let expected = read_expected("search_size_11_training.json");
    assert_eq!(actual, expected.trim_end());
}
