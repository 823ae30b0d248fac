//! Attachment API operations.

use reqwest::Method;
use uuid::Uuid;

use todos_core::todo::UploadUrlResponse;

use super::TodosClient;
use crate::error::Result;

impl TodosClient {
    /// Request a presigned upload URL for a todo's attachment.
    pub async fn generate_upload_url(&self, id: Uuid) -> Result<String> {
        let response = self
            .request(Method::POST, &format!("/todos/{}/attachment", id))
            .send()
            .await?;
        let body: UploadUrlResponse = self.handle_response(response).await?;
        Ok(body.upload_url)
    }

    /// Upload file bytes to a presigned URL.
    ///
    /// The URL carries its own authorization, so no bearer token is sent.
    pub async fn upload_attachment(&self, upload_url: &str, bytes: Vec<u8>) -> Result<()> {
        let response = self.client.put(upload_url).body(bytes).send().await?;
        self.handle_empty_response(response).await
    }
}
