//! Conversation - Model (API functions)

use super::error::ChatError;
use super::ports::ChatApi;
use crate::config::ClientConfig;
use async_trait::async_trait;
use contracts::domain::conversation::{
    HistoryResponse, SendMessageRequest, SendMessageResponse, HISTORY_PATH, MESSAGE_PATH,
    RESET_PATH,
};
use gloo_net::http::Request;

/// `ChatApi` over `fetch`, relative to the configured API base
pub struct HttpChatApi {
    config: ClientConfig,
}

impl HttpChatApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn fetch_history(&self) -> Result<HistoryResponse, ChatError> {
        let url = self.config.api_url(HISTORY_PATH);
        log::debug!("GET {}", url);
        Ok(Request::get(&url).send().await?.json().await?)
    }

    async fn fetch_history_snapshot(&self) -> Result<serde_json::Value, ChatError> {
        let url = self.config.api_url(HISTORY_PATH);
        log::debug!("GET {} (snapshot)", url);
        Ok(Request::get(&url).send().await?.json().await?)
    }

    async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, ChatError> {
        let url = self.config.api_url(MESSAGE_PATH);
        log::debug!("POST {} ({} chars)", url, request.text.chars().count());
        // Error statuses still carry `{ error }`, so the body is decoded regardless.
        let response = Request::post(&url).json(request)?.send().await?;
        if !response.ok() {
            log::warn!("POST {} returned HTTP {}", url, response.status());
        }
        Ok(response.json().await?)
    }

    async fn reset(&self) -> Result<(), ChatError> {
        let url = self.config.api_url(RESET_PATH);
        log::debug!("POST {}", url);
        let response = Request::post(&url).send().await?;
        if !response.ok() {
            return Err(ChatError::Transport(format!("HTTP {}", response.status())));
        }
        Ok(())
    }
}
