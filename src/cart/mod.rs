//! Cart entity, its line-item action, and its errors.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
