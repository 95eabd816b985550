use std::fmt::Debug;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::store::{CollectionStore, StoreError};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any record kept in a collection file must implement to be
/// managed by [`ResourceClient`].
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type CreatePayload: Send + Debug;
    type Patch: Send + Debug;

    // --- Custom Actions ---
    type Action: Send + Debug;
    type ActionResult: Send + Debug;

    /// Name used in logs, e.g. "product".
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Construct the full Entity from the assigned ID and the payload.
    /// An `Err` is reported to the caller as a validation failure.
    fn from_create(id: u64, payload: Self::CreatePayload) -> Result<Self, String>;

    /// Cheap pre-check run before an id is allocated or anything is read.
    fn validate_create(_payload: &Self::CreatePayload) -> Result<(), String> {
        Ok(())
    }

    // --- Lifecycle Hooks ---

    fn on_update(&mut self, patch: Self::Patch);

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(u64),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Next id for a collection: one past the current maximum, or 1 when empty.
/// `None` once the maximum is `u64::MAX`.
pub fn next_id<T: Entity>(records: &[T]) -> Option<u64> {
    match records.iter().map(T::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

// =============================================================================
// 3. THE GENERIC CLIENT
// =============================================================================

/// Generic CRUD over one collection.
///
/// Each call loads the whole collection, works on that private copy and, for
/// mutations, saves the whole collection back. Two concurrent mutations can
/// overwrite each other; there is deliberately no serialization here.
pub struct ResourceClient<T: Entity> {
    store: Arc<dyn CollectionStore<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(store: Arc<dyn CollectionStore<T>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<T> {
        self.store.load().await
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        self.store.load().await.into_iter().find(|item| item.id() == id)
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        T::validate_create(&payload).map_err(FrameworkError::Validation)?;

        let mut items = self.store.load().await;
        let id = next_id(&items).ok_or_else(|| {
            FrameworkError::Validation(format!("No {} ids left to assign", T::KIND))
        })?;
        let item = T::from_create(id, payload).map_err(FrameworkError::Validation)?;

        items.push(item.clone());
        self.store.save(&items).await?;
        info!(kind = T::KIND, id, "Created");
        Ok(item)
    }

    pub async fn update(&self, id: u64, patch: T::Patch) -> Result<T, FrameworkError> {
        let mut items = self.store.load().await;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(FrameworkError::NotFound(id))?;

        item.on_update(patch);
        let updated = item.clone();

        self.store.save(&items).await?;
        info!(kind = T::KIND, id, "Updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<T, FrameworkError> {
        let mut items = self.store.load().await;
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(FrameworkError::NotFound(id))?;

        let removed = items.remove(index);
        self.store.save(&items).await?;
        info!(kind = T::KIND, id, "Deleted");
        Ok(removed)
    }

    pub async fn perform_action(
        &self,
        id: u64,
        action: T::Action,
    ) -> Result<(T, T::ActionResult), FrameworkError> {
        debug!(kind = T::KIND, id, ?action, "Performing action");
        let mut items = self.store.load().await;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(FrameworkError::NotFound(id))?;

        let result = item.handle_action(action).map_err(FrameworkError::Validation)?;
        let updated = item.clone();

        self.store.save(&items).await?;
        Ok((updated, result))
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use serde::Deserialize;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u64,
        text: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        text: String,
    }

    #[derive(Debug)]
    struct NotePatch {
        text: Option<String>,
    }

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    impl Entity for Note {
        type CreatePayload = NoteCreate;
        type Patch = NotePatch;
        type Action = NoteAction;
        type ActionResult = bool;

        const KIND: &'static str = "note";

        fn id(&self) -> u64 {
            self.id
        }

        fn from_create(id: u64, payload: NoteCreate) -> Result<Self, String> {
            if payload.text.is_empty() {
                return Err("text required".to_string());
            }
            Ok(Self {
                id,
                text: payload.text,
                pinned: false,
            })
        }

        fn on_update(&mut self, patch: NotePatch) {
            if let Some(text) = patch.text {
                self.text = text;
            }
        }

        fn handle_action(&mut self, action: NoteAction) -> Result<bool, String> {
            match action {
                NoteAction::Pin => {
                    let changed = !self.pinned;
                    self.pinned = true;
                    Ok(changed)
                }
            }
        }
    }

    fn client_with(notes: Vec<Note>) -> ResourceClient<Note> {
        ResourceClient::new(Arc::new(InMemoryStore::seeded(notes)))
    }

    fn note(id: u64) -> Note {
        Note {
            id,
            text: format!("note {}", id),
            pinned: false,
        }
    }

    // --- Tests ---

    #[test]
    fn next_id_is_one_past_the_maximum() {
        assert_eq!(next_id::<Note>(&[]), Some(1));
        assert_eq!(next_id(&[note(4), note(2)]), Some(5));
        assert_eq!(next_id(&[note(u64::MAX)]), None);
    }

    #[tokio::test]
    async fn create_after_the_largest_id_is_rejected() {
        let client = client_with(vec![note(u64::MAX)]);
        let err = client
            .create(NoteCreate { text: "hi".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Validation(_)));
        assert_eq!(client.list().await, vec![note(u64::MAX)]);
    }

    #[tokio::test]
    async fn create_assigns_ids_after_gaps() {
        let client = client_with(vec![note(1), note(7)]);
        let created = client
            .create(NoteCreate { text: "hi".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 8);
        assert_eq!(client.list().await.last(), Some(&created));
    }

    #[tokio::test]
    async fn create_rejection_persists_nothing() {
        let client = client_with(vec![]);
        let err = client
            .create(NoteCreate { text: String::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Validation(_)));
        assert!(client.list().await.is_empty());
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let client = client_with(vec![note(1)]);
        let err = client.update(2, NotePatch { text: None }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(2)));
        let err = client.delete(2).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(2)));
    }

    #[tokio::test]
    async fn delete_returns_the_removed_record() {
        let client = client_with(vec![note(1), note(2)]);
        let removed = client.delete(1).await.unwrap();
        assert_eq!(removed, note(1));
        assert!(client.get(1).await.is_none());
        assert_eq!(client.list().await, vec![note(2)]);
    }

    #[tokio::test]
    async fn action_persists_its_changes() {
        let client = client_with(vec![note(1)]);

        let (updated, changed) = client.perform_action(1, NoteAction::Pin).await.unwrap();
        assert!(changed);
        assert!(updated.pinned);

        let (_, changed_again) = client.perform_action(1, NoteAction::Pin).await.unwrap();
        assert!(!changed_again);
        assert!(client.get(1).await.unwrap().pinned);
    }
}
