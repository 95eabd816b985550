use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::cart::CartError;
use crate::product::ProductError;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const CART_NOT_FOUND: &str = "Cart not found";

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(_) => error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
            ProductError::ValidationError(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            ProductError::DatabaseError(msg) => {
                error!(error = %msg, "Product persistence failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        match self {
            CartError::NotFound(_) => error_response(StatusCode::NOT_FOUND, CART_NOT_FOUND),
            CartError::ProductNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND)
            }
            CartError::ValidationError(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            CartError::DatabaseError(msg) => {
                error!(error = %msg, "Cart persistence failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

/// Turns a body that could not be read as the expected JSON shape into a
/// validation message.
fn rejection_message(rejection: &JsonRejection) -> String {
    format!("Invalid request body: {}", rejection.body_text())
}

/// The request body as `T`. A request that does not declare a JSON body reads
/// as an empty object, so the usual presence and existence checks decide the
/// response. A declared body that does not fit `T` is a validation message.
pub fn json_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, String> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection_message(&rejection)),
    }
}

pub async fn route_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
