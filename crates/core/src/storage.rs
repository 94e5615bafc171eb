//! Material storage boundary.
//!
//! The tracker only needs to know that a submission exists and how to
//! reference it; the actual object store is an external collaborator
//! behind this trait. The variant is chosen once at construction —
//! configured backends implement this trait elsewhere, and
//! [`LocalPreviewStore`] is the unconfigured stand-in.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage rejected '{path}': {reason}")]
    Rejected { path: String, reason: String },
    #[error("storage transport error: {0}")]
    Transport(String),
}

/// Reference to a stored material object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    pub bucket: String,
    pub path: String,
    pub url: String,
}

#[async_trait]
pub trait MaterialStore: Send + Sync {
    /// Upload an object and return a reference to it.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError>;

    /// Delete a previously uploaded object.
    async fn delete(&self, bucket: &str, path: &str) -> Result<(), StorageError>;
}

/// In-memory store used when no object-store backend is configured.
///
/// Returns deterministic `preview://` URLs so the rest of the pipeline can
/// run locally without credentials.
#[derive(Debug, Default)]
pub struct LocalPreviewStore {
    objects: RwLock<HashMap<String, usize>>,
}

impl LocalPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn object_key(bucket: &str, path: &str) -> String {
        format!("{bucket}/{path}")
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl MaterialStore for LocalPreviewStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        if path.is_empty() {
            return Err(StorageError::Rejected {
                path: path.to_string(),
                reason: "empty object path".to_string(),
            });
        }
        let key = Self::object_key(bucket, path);
        self.objects.write().await.insert(key.clone(), bytes.len());
        tracing::debug!(%key, "stored preview object");
        Ok(StoredObject {
            bucket: bucket.to_string(),
            path: path.to_string(),
            url: format!("preview://{key}"),
        })
    }

    async fn delete(&self, bucket: &str, path: &str) -> Result<(), StorageError> {
        let key = Self::object_key(bucket, path);
        match self.objects.write().await.remove(&key) {
            Some(_) => Ok(()),
            None => Err(StorageError::Rejected {
                path: path.to_string(),
                reason: "no such object".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_then_delete_round_trip() {
        let store = LocalPreviewStore::new();
        let stored = store
            .upload("materials", "p1/hero.webp", vec![1, 2, 3], "image/webp")
            .await
            .unwrap();
        assert_eq!(stored.url, "preview://materials/p1/hero.webp");
        assert_eq!(store.object_count().await, 1);

        store.delete("materials", "p1/hero.webp").await.unwrap();
        assert_eq!(store.object_count().await, 0);
    }

    #[tokio::test]
    async fn deleting_unknown_object_errors() {
        let store = LocalPreviewStore::new();
        assert!(matches!(
            store.delete("materials", "nope.png").await,
            Err(StorageError::Rejected { .. })
        ));
    }

    #[tokio::test]
    async fn empty_path_is_rejected() {
        let store = LocalPreviewStore::new();
        assert!(matches!(
            store.upload("materials", "", vec![], "image/png").await,
            Err(StorageError::Rejected { .. })
        ));
    }
}
