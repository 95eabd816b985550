use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use super::error::json_body;
use super::params::parse_id;
use crate::app_system::ShopSystem;
use crate::cart::CartError;
use crate::domain::{Cart, CartPatch};

fn cart_id(raw: &str) -> Result<u64, CartError> {
    parse_id(raw).ok_or(CartError::NotFound(0))
}

pub async fn list_carts(State(system): State<ShopSystem>) -> Json<Vec<Cart>> {
    Json(system.cart_client.list_carts().await)
}

pub async fn get_cart(
    State(system): State<ShopSystem>,
    Path(cid): Path<String>,
) -> Result<Json<Cart>, CartError> {
    let id = cart_id(&cid)?;
    system.cart_client.get_cart(id).await.map(Json)
}

/// Any request body is ignored; carts always start empty.
pub async fn create_cart(
    State(system): State<ShopSystem>,
) -> Result<impl IntoResponse, CartError> {
    let cart = system.cart_client.create_cart().await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

pub async fn update_cart(
    State(system): State<ShopSystem>,
    Path(cid): Path<String>,
    payload: Result<Json<CartPatch>, JsonRejection>,
) -> Result<Json<Cart>, CartError> {
    let id = cart_id(&cid)?;
    let patch = json_body(payload).map_err(CartError::ValidationError)?;
    system.cart_client.update_cart(id, patch).await.map(Json)
}

pub async fn delete_cart(
    State(system): State<ShopSystem>,
    Path(cid): Path<String>,
) -> Result<impl IntoResponse, CartError> {
    let id = cart_id(&cid)?;
    let removed = system.cart_client.delete_cart(id).await?;
    Ok(Json(json!({ "message": "Cart deleted", "cart": removed })))
}

pub async fn add_product(
    State(system): State<ShopSystem>,
    Path((cid, pid)): Path<(String, String)>,
) -> Result<Json<Cart>, CartError> {
    let cart_id = cart_id(&cid)?;
    let product_id = match parse_id(&pid) {
        Some(id) => id,
        None => {
            // Cart existence is still reported first.
            system.cart_client.get_cart(cart_id).await?;
            return Err(CartError::ProductNotFound(0));
        }
    };
    system
        .cart_client
        .add_product(cart_id, product_id)
        .await
        .map(Json)
}
