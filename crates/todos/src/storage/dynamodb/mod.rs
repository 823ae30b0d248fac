//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `TodoRepository`
//! using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
