use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::error::json_body;
use super::params::{parse_id, parse_limit};
use crate::app_system::ShopSystem;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product::ProductError;

fn product_id(raw: &str) -> Result<u64, ProductError> {
    // An unparseable id can never match a stored product.
    parse_id(raw).ok_or(ProductError::NotFound(0))
}

fn body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ProductError> {
    json_body(payload).map_err(ProductError::ValidationError)
}

pub async fn list_products(
    State(system): State<ShopSystem>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Product>> {
    let limit = parse_limit(query.get("limit").map(String::as_str));
    Json(system.product_client.list_products(limit).await)
}

pub async fn get_product(
    State(system): State<ShopSystem>,
    Path(pid): Path<String>,
) -> Result<Json<Product>, ProductError> {
    let id = product_id(&pid)?;
    system.product_client.get_product(id).await.map(Json)
}

pub async fn create_product(
    State(system): State<ShopSystem>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Result<impl IntoResponse, ProductError> {
    let payload = body(payload)?;
    let product = system.product_client.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(system): State<ShopSystem>,
    Path(pid): Path<String>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, ProductError> {
    let id = product_id(&pid)?;
    let patch = body(payload)?;
    system.product_client.update_product(id, patch).await.map(Json)
}

pub async fn delete_product(
    State(system): State<ShopSystem>,
    Path(pid): Path<String>,
) -> Result<impl IntoResponse, ProductError> {
    let id = product_id(&pid)?;
    let removed = system.product_client.delete_product(id).await?;
    Ok(Json(json!({ "message": "Product deleted", "product": removed })))
}
