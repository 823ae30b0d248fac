use std::{env, time::Duration};

use anyhow::{bail, Context};

/// Endpoint of DynamoDB Local, used when running offline.
pub const OFFLINE_DYNAMODB_ENDPOINT: &str = "http://localhost:8000";

/// Upload URL lifetime when `SIGNED_URL_EXPIRATION` is unset.
const DEFAULT_SIGNED_URL_EXPIRATION_SECONDS: u64 = 300;

/// S3 rejects presigned URLs valid for longer than seven days.
const MAX_SIGNED_URL_EXPIRATION_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding todo records (default: "todos")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub todos_table: String,
    /// Index queried when listing a user's todos (default: "UserIdIndex")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub index_name: String,
    /// Bucket holding todo attachments (default: "todos-attachments")
    pub attachments_bucket: String,
    /// Lifetime of presigned upload URLs in seconds (default: 300)
    pub signed_url_expiration_seconds: u64,
    /// Explicit DynamoDB endpoint, e.g. DynamoDB Local.
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - DynamoDB table name (default: "todos")
    /// - `INDEX_NAME` - Index used to list todos by user (default: "UserIdIndex")
    /// - `ATTACHMENTS_S3_BUCKET` - Attachments bucket (default: "todos-attachments")
    /// - `SIGNED_URL_EXPIRATION` - Upload URL lifetime in seconds (default: 300)
    /// - `DYNAMODB_ENDPOINT` - DynamoDB endpoint override (default: none)
    /// - `IS_OFFLINE` - When set, the endpoint defaults to DynamoDB Local
    ///
    /// Fails when `SIGNED_URL_EXPIRATION` is not a number of seconds S3 accepts.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            todos_table: env::var("TODOS_TABLE").unwrap_or_else(|_| "todos".to_string()),
            index_name: env::var("INDEX_NAME").unwrap_or_else(|_| "UserIdIndex".to_string()),
            attachments_bucket: env::var("ATTACHMENTS_S3_BUCKET")
                .unwrap_or_else(|_| "todos-attachments".to_string()),
            signed_url_expiration_seconds: parse_signed_url_expiration(
                env::var("SIGNED_URL_EXPIRATION").ok().as_deref(),
            )?,
            dynamodb_endpoint: resolve_dynamodb_endpoint(
                env::var("DYNAMODB_ENDPOINT").ok(),
                env::var("IS_OFFLINE").is_ok(),
            ),
        })
    }

    /// Get the upload URL lifetime as a Duration.
    pub fn signed_url_expiration(&self) -> Duration {
        Duration::from_secs(self.signed_url_expiration_seconds)
    }
}

fn parse_signed_url_expiration(value: Option<&str>) -> anyhow::Result<u64> {
    let Some(value) = value else {
        return Ok(DEFAULT_SIGNED_URL_EXPIRATION_SECONDS);
    };

    let seconds: u64 = value.trim().parse().with_context(|| {
        format!("SIGNED_URL_EXPIRATION must be a number of seconds, got {value:?}")
    })?;

    if seconds == 0 || seconds > MAX_SIGNED_URL_EXPIRATION_SECONDS {
        bail!(
            "SIGNED_URL_EXPIRATION must be between 1 and {} seconds, got {}",
            MAX_SIGNED_URL_EXPIRATION_SECONDS,
            seconds
        );
    }

    Ok(seconds)
}

/// An explicit endpoint wins; offline mode falls back to DynamoDB Local.
fn resolve_dynamodb_endpoint(explicit: Option<String>, is_offline: bool) -> Option<String> {
    explicit
        .filter(|endpoint| !endpoint.trim().is_empty())
        .or_else(|| is_offline.then(|| OFFLINE_DYNAMODB_ENDPOINT.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_url_expiration_conversion() {
        let config = Config {
            todos_table: "todos".to_string(),
            index_name: "UserIdIndex".to_string(),
            attachments_bucket: "todos-attachments".to_string(),
            signed_url_expiration_seconds: 600,
            dynamodb_endpoint: None,
        };

        assert_eq!(config.signed_url_expiration(), Duration::from_secs(600));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("TODOS_TABLE");
        env::remove_var("INDEX_NAME");
        env::remove_var("ATTACHMENTS_S3_BUCKET");
        env::remove_var("SIGNED_URL_EXPIRATION");
        env::remove_var("DYNAMODB_ENDPOINT");
        env::remove_var("IS_OFFLINE");

        let config = Config::from_env().unwrap();

        assert_eq!(config.todos_table, "todos");
        assert_eq!(config.index_name, "UserIdIndex");
        assert_eq!(config.attachments_bucket, "todos-attachments");
        assert_eq!(config.signed_url_expiration_seconds, 300);
        assert_eq!(config.dynamodb_endpoint, None);
    }

    #[test]
    fn test_offline_endpoint() {
        assert_eq!(
            resolve_dynamodb_endpoint(None, true),
            Some("http://localhost:8000".to_string())
        );
        assert_eq!(resolve_dynamodb_endpoint(None, false), None);
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        assert_eq!(
            resolve_dynamodb_endpoint(Some("http://dynamo:9000".to_string()), true),
            Some("http://dynamo:9000".to_string())
        );
        assert_eq!(resolve_dynamodb_endpoint(Some("  ".to_string()), false), None);
    }

    #[test]
    fn test_signed_url_expiration_parsing() {
        assert_eq!(parse_signed_url_expiration(None).unwrap(), 300);
        assert_eq!(parse_signed_url_expiration(Some("900")).unwrap(), 900);
        assert_eq!(parse_signed_url_expiration(Some("604800")).unwrap(), 604800);
    }

    #[test]
    fn test_malformed_signed_url_expiration_is_rejected() {
        let err = parse_signed_url_expiration(Some("five minutes")).unwrap_err();
        assert!(err.to_string().contains("SIGNED_URL_EXPIRATION"));
    }

    #[test]
    fn test_out_of_range_signed_url_expiration_is_rejected() {
        assert!(parse_signed_url_expiration(Some("0")).is_err());
        assert!(parse_signed_url_expiration(Some("604801")).is_err());
    }
}
