use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{CollectionStore, StoreError};

/// A collection persisted as one pretty-printed JSON array on disk.
///
/// Every `load` re-reads the file and every `save` overwrites it in full.
/// Nothing is cached and nothing is locked.
pub struct FileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl<T> CollectionStore<T> for FileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn load(&self) -> Vec<T> {
        debug!(path = %self.path.display(), "Reading collection");
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Collection file missing, treating as empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Collection unreadable, treating as empty");
                return Vec::new();
            }
        };

        let raw: Vec<Value> = match serde_json::from_str(&contents) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Collection malformed, treating as empty");
                return Vec::new();
            }
        };

        // One record that cannot be read must not hide the rest.
        raw.into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(path = %self.path.display(), index, error = %e, "Skipping unreadable record");
                    None
                }
            })
            .collect()
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), count = records.len(), "Writing collection");
        let contents = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| self.io_error(e))
    }
}
