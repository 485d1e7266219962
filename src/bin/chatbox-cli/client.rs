//! HTTP client for the relay endpoints

use crate::debounce::TypingSink;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rejected ({status}): {body}")]
    Rejected { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct ClipboardResponse {
    text: String,
}

/// Relay API client
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<()> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST /send`
    pub async fn send(&self, text: &str, play_sound: bool) -> Result<()> {
        self.post("/send", json!({ "text": text, "playSound": play_sound }))
            .await
    }

    /// `POST /send-copy`
    pub async fn send_copy(&self, text: &str) -> Result<()> {
        self.post("/send-copy", json!({ "text": text })).await
    }

    /// `POST /typing`
    pub async fn set_typing(&self, typing: bool) -> Result<()> {
        self.post("/typing", json!({ "typing": typing })).await
    }

    /// `GET /history`, oldest first
    pub async fn history(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.url("/history")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `POST /copy`
    pub async fn copy(&self, message: &str) -> Result<()> {
        self.post("/copy", json!({ "message": message })).await
    }

    /// `GET /copy`
    pub async fn paste(&self) -> Result<String> {
        let response = self.client.get(self.url("/copy")).send().await?;
        let clipboard: ClipboardResponse = Self::check(response).await?.json().await?;
        Ok(clipboard.text)
    }
}

#[async_trait]
impl TypingSink for RelayClient {
    async fn signal(&self, typing: bool) {
        if let Err(e) = self.set_typing(typing).await {
            eprintln!("\r[warning] Failed to update typing status: {}", e);
        }
    }
}
