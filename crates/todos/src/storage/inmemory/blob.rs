//! In-memory blob store implementation.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{BlobStore, BlobStoreError};

/// In-memory blob store for testing.
///
/// Presigned URLs use the `memory://` scheme. Test builds also record which
/// keys were presigned and deleted.
#[derive(Debug, Clone)]
pub struct InMemoryBlobStore {
    bucket: String,
    blobs: Arc<RwLock<HashSet<String>>>,
    #[cfg(test)]
    presigned: Arc<RwLock<Vec<String>>>,
    #[cfg(test)]
    deleted: Arc<RwLock<Vec<String>>>,
}

impl InMemoryBlobStore {
    /// Creates an empty store for the given bucket name.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            blobs: Arc::new(RwLock::new(HashSet::new())),
            #[cfg(test)]
            presigned: Arc::new(RwLock::new(Vec::new())),
            #[cfg(test)]
            deleted: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[cfg(test)]
impl InMemoryBlobStore {
    /// Simulates a client uploading to `key`.
    pub async fn put_blob(&self, key: impl Into<String>) {
        self.blobs.write().await.insert(key.into());
    }

    /// Returns true if a blob is stored at `key`.
    pub async fn contains(&self, key: &str) -> bool {
        self.blobs.read().await.contains(key)
    }

    /// Keys that upload URLs were issued for, in order.
    pub async fn presigned_keys(&self) -> Vec<String> {
        self.presigned.read().await.clone()
    }

    /// Keys that deletes were issued for, in order.
    pub async fn deleted_keys(&self) -> Vec<String> {
        self.deleted.read().await.clone()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn presign_upload(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, BlobStoreError> {
        #[cfg(test)]
        self.presigned.write().await.push(key.to_string());
        Ok(format!(
            "memory://{}/{}?expires_in={}",
            self.bucket,
            key,
            expires_in.as_secs()
        ))
    }

    fn public_url(&self, key: &str) -> String {
        format!("memory://{}/{}", self.bucket, key)
    }

    async fn delete_blob(&self, key: &str) -> Result<(), BlobStoreError> {
        self.blobs.write().await.remove(key);
        #[cfg(test)]
        self.deleted.write().await.push(key.to_string());
        Ok(())
    }
}
