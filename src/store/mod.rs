//! Whole-collection persistence.
//!
//! A [`CollectionStore`] holds one resource type as a single ordered array.
//! Callers load the entire array, work on it, and save the entire array back.
//! Loading never fails: an unreadable or malformed collection is reported as
//! empty, and a single record that does not decode is left out on its own.

pub mod error;
pub mod file;
#[cfg(test)]
pub mod memory;

pub use error::*;
pub use file::FileStore;
#[cfg(test)]
pub use memory::InMemoryStore;

use async_trait::async_trait;

#[async_trait]
pub trait CollectionStore<T>: Send + Sync {
    /// Returns every record in stored order, or an empty vector if the
    /// collection cannot be read.
    async fn load(&self) -> Vec<T>;

    /// Replaces the whole collection.
    async fn save(&self, records: &[T]) -> Result<(), StoreError>;
}
