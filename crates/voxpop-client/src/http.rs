use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::json;
use tracing::{debug, warn};
use voxpop_types::{FeedbackDraft, FeedbackRecord};

use crate::api::FeedbackApi;
use crate::error::{ApiError, Result};

/// Record store client over HTTP.
///
/// `base_url` is the collection endpoint itself: `list` GETs it, `create`
/// POSTs to it and `remove` DELETEs `base_url/{id}`.
pub struct HttpFeedbackApi {
    client: Client,
    base_url: String,
}

impl HttpFeedbackApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_trailing_slashes(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared status mapping for all three operations: non-success becomes
    /// `ApiError::Transport` with the body captured when readable.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.ok().filter(|b| !b.is_empty());
        warn!(status = status.as_u16(), "record store request failed");
        Err(ApiError::Transport {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl FeedbackApi for HttpFeedbackApi {
    async fn list(&self) -> Result<Vec<FeedbackRecord>> {
        debug!(url = %self.base_url, "fetching feedback records");
        let response = self.client.get(&self.base_url).send().await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    async fn create(&self, draft: &FeedbackDraft) -> Result<FeedbackRecord> {
        // The form has always posted an empty string for "no category";
        // the backend stores it verbatim and readers default it to general.
        let payload = json!({
            "name": draft.name,
            "email": draft.email,
            "category": draft.category.as_deref().unwrap_or(""),
            "message": draft.message,
            "rating": draft.rating,
        });
        let response = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, id);
        debug!(%url, "deleting feedback record");
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

fn trim_trailing_slashes(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
