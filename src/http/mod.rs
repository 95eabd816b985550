//! HTTP surface: axum routes over the domain clients.

pub mod carts;
pub mod error;
pub mod health;
pub mod params;
pub mod products;

use axum::routing::{get, post};
use axum::Router;

use crate::app_system::ShopSystem;

pub fn router(system: ShopSystem) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/{pid}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/api/carts", get(carts::list_carts).post(carts::create_cart))
        .route(
            "/api/carts/{cid}",
            get(carts::get_cart)
                .put(carts::update_cart)
                .delete(carts::delete_cart),
        )
        .route("/api/carts/{cid}/product/{pid}", post(carts::add_product))
        .route("/health", get(health::liveness))
        .fallback(error::route_not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .with_state(system)
}
