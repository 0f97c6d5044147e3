use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::core::error::AppError;
use crate::features::notify::dto::NotificationPayload;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, payload: &NotificationPayload) -> Result<(), AppError>;
}

/// Posts payloads to a webhook endpoint. The client's own timeout bounds
/// every call.
pub struct WebhookNotifier {
    http_client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(http_client: Client, url: String) -> Self {
        Self { http_client, url }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, payload: &NotificationPayload) -> Result<(), AppError> {
        let body = serde_json::to_vec(payload)
            .map_err(|err| AppError::internal(format!("failed to encode payload: {err}")))?;

        // reqwest errors carry the request URL; strip it so the secret stays out of logs.
        let response = self
            .http_client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| {
                AppError::upstream(format!("webhook request failed: {}", err.without_url()))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "webhook responded with status {status}"
            )));
        }

        Ok(())
    }
}
