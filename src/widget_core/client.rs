use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::config::WidgetConfig;
use super::types::AskRequest;

#[derive(Debug, Error)]
pub enum AskError {
    #[error("request to bot failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("bot answered with status {0}")]
    Status(StatusCode),
}

/// Relays widget messages to the remote bot endpoint.
#[derive(Clone)]
pub struct BotClient {
    client: Client,
    ask_url: String,
    bot_id: String,
}

impl BotClient {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            client: Client::new(),
            ask_url: config.ask_url(),
            bot_id: config.bot_id.clone(),
        }
    }

    /// Returns the reply body as plain text. Any non-2xx status is an error.
    pub async fn ask(&self, request: &AskRequest) -> Result<String, AskError> {
        let response = self
            .client
            .post(&self.ask_url)
            .query(&[("botId", &self.bot_id)])
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AskError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}
