#![allow(dead_code)]

use std::collections::BTreeMap;

use mcp_product_server::catalog::{Catalog, Product, StockLine};

pub fn product(id: &str, name: &str, category: &str, price: f64) -> Product {
    Product {
        product_id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        category: category.to_string(),
        price,
    }
}

pub fn line(color: &str, size: &str, quantity: u64) -> StockLine {
    StockLine {
        color: color.to_string(),
        size: size.to_string(),
        quantity,
    }
}

/// P001 (Lifestyle, no inventory entry) and P002 (Running, two lines).
pub fn two_product_catalog() -> Catalog {
    let products = vec![
        product("P001", "Essence", "Lifestyle", 100.0),
        product("P002", "Stride", "Running", 120.0),
    ];
    let mut inventory = BTreeMap::new();
    inventory.insert(
        "P002".to_string(),
        vec![line("Black", "8", 10), line("Red", "10", 10)],
    );
    Catalog::new(products, inventory).unwrap()
}

pub fn builtin() -> Catalog {
    Catalog::builtin().expect("builtin catalog must load")
}
