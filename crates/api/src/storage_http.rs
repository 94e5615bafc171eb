//! Configured object-store variant.
//!
//! Talks to a Supabase-style storage HTTP endpoint. Selected once at
//! startup when `STORAGE_URL` is set; the local preview store is used
//! otherwise.

use async_trait::async_trait;

use pageflow_core::storage::{MaterialStore, StorageError, StoredObject};

use crate::config::StorageSettings;

pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpObjectStore {
    pub fn new(settings: &StorageSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{path}", self.base_url)
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.base_url)
    }
}

#[async_trait]
impl MaterialStore for HttpObjectStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        let response = self
            .client
            .post(self.object_url(bucket, path))
            .bearer_auth(&self.api_key)
            .header("content-type", content_type.to_string())
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Rejected {
                path: path.to_string(),
                reason: format!("upload returned {}", response.status()),
            });
        }

        Ok(StoredObject {
            bucket: bucket.to_string(),
            path: path.to_string(),
            url: self.public_url(bucket, path),
        })
    }

    async fn delete(&self, bucket: &str, path: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(self.object_url(bucket, path))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Rejected {
                path: path.to_string(),
                reason: format!("delete returned {}", response.status()),
            });
        }
        Ok(())
    }
}
