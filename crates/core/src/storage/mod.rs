mod error;
mod http_mapping;
mod traits;

pub use error::{BlobStoreError, RepositoryError, Result};
pub use http_mapping::todo_error_to_status_code;
pub use traits::{BlobStore, TodoRepository};
