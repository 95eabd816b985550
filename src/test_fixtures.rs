//! # Test Fixtures
//!
//! Seeded in-memory systems for client and router tests. Nothing here touches
//! the disk; use [`file_system`] when a test needs real collection files.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Number, Value};

use crate::app_system::ShopSystem;
use crate::clients::{CartClient, ProductClient};
use crate::domain::{Cart, Product, ProductCreate};
use crate::resource_framework::ResourceClient;
use crate::store::{FileStore, InMemoryStore};

pub fn product(
    id: u64,
    title: impl Into<String>,
    price: impl Into<Number>,
    stock: impl Into<Number>,
) -> Product {
    let title = title.into();
    Product {
        id,
        description: Some(format!("{} description", title)),
        code: Some(format!("P{}", id)),
        title: Some(title),
        price: Some(Value::Number(price.into())),
        status: Some(true),
        stock: Some(Value::Number(stock.into())),
        category: Some("general".to_string()),
        thumbnails: Some(Vec::new()),
        extra: Map::new(),
    }
}

/// Products `1..=count` titled "Product N".
pub fn products(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| product(id, format!("Product {}", id), id * 10, 5))
        .collect()
}

/// Empty carts `1..=count`.
pub fn carts(count: u64) -> Vec<Cart> {
    (1..=count).map(Cart::new).collect()
}

/// A creation payload with every required field filled in.
pub fn complete_product() -> ProductCreate {
    ProductCreate {
        title: Some("T".to_string()),
        description: Some("D".to_string()),
        code: Some("C1".to_string()),
        price: Some(Number::from(10)),
        stock: Some(Number::from(5)),
        category: Some("cat".to_string()),
        thumbnails: None,
    }
}

pub fn product_client_with(count: u64) -> ProductClient {
    ProductClient::new(ResourceClient::new(Arc::new(InMemoryStore::seeded(
        products(count),
    ))))
}

pub fn memory_system(product_count: u64, cart_count: u64) -> ShopSystem {
    ShopSystem::new(
        Arc::new(InMemoryStore::seeded(products(product_count))),
        Arc::new(InMemoryStore::seeded(carts(cart_count))),
    )
}

pub fn memory_clients(product_count: u64, cart_count: u64) -> (ProductClient, CartClient) {
    let system = memory_system(product_count, cart_count);
    (system.product_client, system.cart_client)
}

/// A system over `products.json` and `carts.json` inside `dir`.
pub fn file_system(dir: &Path) -> ShopSystem {
    ShopSystem::new(
        Arc::new(FileStore::<Product>::new(dir.join("products.json"))),
        Arc::new(FileStore::<Cart>::new(dir.join("carts.json"))),
    )
}
