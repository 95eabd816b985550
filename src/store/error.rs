use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing a collection. Reads never produce one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write collection file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
