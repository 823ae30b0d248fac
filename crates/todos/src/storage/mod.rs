//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TodoRepository` and
//! `BlobStore` traits defined in `todos_core::storage`. The implementations
//! used by the server are selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed records and attachments, nothing leaves the process
//! - `dynamodb`: records in DynamoDB via `aws-sdk-dynamodb`, attachments in S3 via `aws-sdk-s3`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory backend is always compiled for tests.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p todos
//! ```
//!
//! Build with DynamoDB and S3:
//! ```bash
//! cargo build -p todos --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p todos --features inmemory"
);

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "dynamodb")]
pub mod s3;
