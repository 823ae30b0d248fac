//! DynamoDB error mapping.
//!
//! Only a failed `attribute_exists` condition on UpdateItem carries meaning
//! for callers. Every other SDK failure is a store failure.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use todos_core::storage::RepositoryError;
use uuid::Uuid;

/// Wraps any SDK failure of `operation` as a `QueryFailed` error.
pub fn store_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> RepositoryError
where
    E: Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    RepositoryError::QueryFailed(format!("{operation} failed: {}", DisplayErrorContext(&err)))
}

/// Maps an UpdateItem failure; a failed condition check means the todo is gone.
pub fn update_error<R>(err: SdkError<UpdateItemError, R>, todo_id: Uuid) -> RepositoryError
where
    R: Debug + Send + Sync + 'static,
{
    let condition_failed = matches!(
        err.as_service_error(),
        Some(UpdateItemError::ConditionalCheckFailedException(_))
    );

    if condition_failed {
        RepositoryError::NotFound {
            entity_type: "Todo",
            id: todo_id.to_string(),
        }
    } else {
        store_error("UpdateItem", err)
    }
}
