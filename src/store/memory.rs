use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CollectionStore, StoreError};

/// A collection held in process memory, for tests.
///
/// The lock covers a single `load` or `save`, not a whole read-modify-write
/// cycle, so concurrent writers race exactly as they do against a file.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryStore<T> {
    pub fn seeded(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl<T> CollectionStore<T> for InMemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn load(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cart;

    #[tokio::test]
    async fn load_returns_a_working_copy() {
        let store = InMemoryStore::seeded(vec![Cart::new(1)]);

        let mut copy = store.load().await;
        copy.push(Cart::new(2));

        assert_eq!(store.load().await, vec![Cart::new(1)]);
    }

    #[tokio::test]
    async fn save_replaces_everything() {
        let store = InMemoryStore::seeded(vec![Cart::new(1), Cart::new(2)]);
        store.save(&[Cart::new(5)]).await.unwrap();
        assert_eq!(store.load().await, vec![Cart::new(5)]);
    }
}
