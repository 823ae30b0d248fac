//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage adapters are built once at startup and the
//! backend is selected via feature flags.

use std::sync::Arc;

use todos_core::storage::{BlobStore, TodoRepository};

use crate::{attachments::Attachments, config::Config, service::TodoService};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Todo operations over the configured stores.
    pub service: TodoService,
}

impl AppState {
    /// Creates an AppState from already-built adapters.
    pub fn from_parts(
        repo: Arc<dyn TodoRepository>,
        blobs: Arc<dyn BlobStore>,
        config: &Config,
    ) -> Self {
        let attachments = Attachments::new(repo.clone(), blobs, config.signed_url_expiration());

        Self {
            service: TodoService::new(repo, attachments),
        }
    }
}

#[cfg(any(test, feature = "inmemory"))]
mod inmemory {
    use super::*;
    use crate::storage::inmemory::{InMemoryBlobStore, InMemoryRepository};

    impl AppState {
        /// Creates AppState with in-memory records and attachments.
        /// Useful for testing without any external dependencies.
        pub fn in_memory(config: &Config) -> Self {
            Self::from_parts(
                Arc::new(InMemoryRepository::new()),
                Arc::new(InMemoryBlobStore::new(config.attachments_bucket.clone())),
                config,
            )
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;

    impl AppState {
        /// Creates AppState for the in-memory backend.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage");
            Ok(Self::in_memory(config))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::dynamodb::DynamoDbRepository;
    use crate::storage::s3::S3BlobStore;

    impl AppState {
        /// Creates AppState with DynamoDB records and S3 attachments.
        ///
        /// Uses the AWS SDK default credential chain.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

            let mut dynamodb_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
            if let Some(endpoint) = &config.dynamodb_endpoint {
                dynamodb_config = dynamodb_config.endpoint_url(endpoint);
            }
            let dynamodb = aws_sdk_dynamodb::Client::from_conf(dynamodb_config.build());

            let repo = DynamoDbRepository::new(dynamodb, &config.todos_table, &config.index_name);
            let blobs = S3BlobStore::new(
                aws_sdk_s3::Client::new(&sdk_config),
                &config.attachments_bucket,
            );

            tracing::info!(
                table = repo.table_name(),
                index = %config.index_name,
                bucket = blobs.bucket(),
                endpoint = ?config.dynamodb_endpoint,
                "Using DynamoDB storage with S3 attachments"
            );

            Ok(Self::from_parts(Arc::new(repo), Arc::new(blobs), config))
        }
    }
}
