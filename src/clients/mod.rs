//! Domain clients: thin, instrumented wrappers around [`ResourceClient`]
//! that speak in domain errors.
//!
//! [`ResourceClient`]: crate::resource_framework::ResourceClient

#[macro_use]
mod macros;
pub mod product_client;
pub mod cart_client;

pub use product_client::*;
pub use cart_client::*;
