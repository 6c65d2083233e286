//! Query engine behaviour: category → size → color narrowing, emission rule,
//! availability totals and ordering.

mod support;

use std::collections::BTreeMap;

use mcp_product_server::catalog::{Catalog, SearchFilter};
use support::{builtin, line, product, two_product_catalog};

fn ids(results: &[mcp_product_server::catalog::SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.product.product_id.as_str()).collect()
}

#[test]
fn unfiltered_search_returns_every_stocked_product_in_catalog_order() {
    let catalog = builtin();
    let results = catalog.search(&SearchFilter::new());

    assert_eq!(ids(&results), vec!["P001", "P002", "P003", "P004"]);

    let totals: Vec<u64> = results.iter().map(|r| r.total_available).collect();
    assert_eq!(totals, vec![100, 60, 45, 57]);

    for result in &results {
        let stock = catalog.stock_for(&result.product.product_id);
        assert_eq!(result.available_options, stock, "unfiltered search keeps every line");
    }
}

#[test]
fn products_without_inventory_entry_are_dropped() {
    let catalog = two_product_catalog();
    let results = catalog.search(&SearchFilter::new());

    assert_eq!(ids(&results), vec!["P002"]);
    assert_eq!(results[0].total_available, 20);
}

#[test]
fn running_red_scenario() {
    let catalog = two_product_catalog();
    let results = catalog.search(&SearchFilter::new().category("Running").color("red"));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].product.product_id, "P002");
    assert_eq!(results[0].available_options, vec![line("Red", "10", 10)]);
    assert_eq!(results[0].total_available, 10);
}

#[test]
fn size_filter_is_exact_string_match() {
    let catalog = builtin();
    let results = catalog.search(&SearchFilter::new().size("8"));

    assert_eq!(ids(&results), vec!["P001", "P002", "P003", "P004"]);
    for result in &results {
        assert!(!result.available_options.is_empty());
        for option in &result.available_options {
            assert_eq!(option.size, "8");
        }
    }
    assert_eq!(results[0].total_available, 50);

    assert!(catalog.search(&SearchFilter::new().size("8.0")).is_empty());
    assert!(catalog.search(&SearchFilter::new().size(" 8")).is_empty());
}

#[test]
fn product_with_no_matching_lines_is_absent_not_empty() {
    let catalog = builtin();
    let results = catalog.search(&SearchFilter::new().color("blue"));

    assert_eq!(ids(&results), vec!["P004"]);
    assert_eq!(results[0].available_options.len(), 2);
    assert_eq!(results[0].total_available, 19);
    assert!(results.iter().all(|r| !r.available_options.is_empty()));
}

#[test]
fn category_matching_ignores_case_and_surrounding_whitespace() {
    let catalog = builtin();
    let baseline = catalog.search(&SearchFilter::new().category("running"));
    assert_eq!(ids(&baseline), vec!["P002"]);

    for variant in ["RUNNING", "Running", "  running ", "rUnNiNg"] {
        let results = catalog.search(&SearchFilter::new().category(variant));
        assert_eq!(results, baseline, "category {variant:?} should match running");
    }
}

#[test]
fn color_matching_ignores_case() {
    let catalog = builtin();
    let lower = catalog.search(&SearchFilter::new().color("green"));
    let upper = catalog.search(&SearchFilter::new().color("GREEN"));

    assert_eq!(ids(&lower), vec!["P002", "P003"]);
    assert_eq!(lower, upper);
}

#[test]
fn all_three_filters_compose() {
    let catalog = builtin();
    let results = catalog.search(
        &SearchFilter::new()
            .category("training")
            .size("9")
            .color("white"),
    );

    assert_eq!(ids(&results), vec!["P003", "P004"]);
    assert_eq!(results[0].available_options, vec![line("White", "9", 15)]);
    assert_eq!(results[1].available_options, vec![line("White", "9", 12)]);
}

#[test]
fn unknown_category_or_size_yields_empty_results() {
    let catalog = builtin();
    assert!(catalog.search(&SearchFilter::new().category("hiking")).is_empty());
    assert!(catalog.search(&SearchFilter::new().size("12")).is_empty());
    assert!(catalog
        .search(&SearchFilter::new().category("lifestyle").color("blue"))
        .is_empty());
}

#[test]
fn empty_string_filter_is_a_real_value() {
    let catalog = builtin();
    assert!(catalog.search(&SearchFilter::new().size("")).is_empty());
    assert!(catalog.search(&SearchFilter::new().color("")).is_empty());
}

#[test]
fn available_options_keep_inventory_order() {
    let products = vec![product("X1", "Glide", "Trail", 90.0)];
    let mut inventory = BTreeMap::new();
    inventory.insert(
        "X1".to_string(),
        vec![
            line("Teal", "10", 1),
            line("Black", "10", 2),
            line("Amber", "9", 3),
            line("Amber", "10", 4),
        ],
    );
    let catalog = Catalog::new(products, inventory).unwrap();

    let results = catalog.search(&SearchFilter::new().size("10"));
    let colors: Vec<&str> = results[0]
        .available_options
        .iter()
        .map(|o| o.color.as_str())
        .collect();
    assert_eq!(colors, vec!["Teal", "Black", "Amber"]);
    assert_eq!(results[0].total_available, 7);
}

#[test]
fn zero_quantity_lines_still_count_as_matches() {
    let products = vec![product("Z1", "Idle", "Lifestyle", 10.0)];
    let mut inventory = BTreeMap::new();
    inventory.insert("Z1".to_string(), vec![line("Grey", "7", 0)]);
    let catalog = Catalog::new(products, inventory).unwrap();

    let results = catalog.search(&SearchFilter::new());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].total_available, 0);
}

#[test]
fn search_result_serializes_flat() {
    let catalog = two_product_catalog();
    let results = catalog.search(&SearchFilter::new().color("black"));
    let value = serde_json::to_value(&results).unwrap();

    let first = &value[0];
    assert_eq!(first["product_id"], "P002");
    assert_eq!(first["name"], "Stride");
    assert_eq!(first["category"], "Running");
    assert_eq!(first["price"], 120.0);
    assert_eq!(first["total_available"], 10);
    assert_eq!(first["available_options"][0]["color"], "Black");
    assert_eq!(first["available_options"][0]["size"], "8");
    assert_eq!(first["available_options"][0]["quantity"], 10);
    assert!(first.get("product").is_none(), "product fields must be flattened");
}
