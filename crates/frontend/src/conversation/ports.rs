use super::error::ChatError;
use async_trait::async_trait;
use contracts::domain::conversation::{
    HistoryResponse, Message, SendMessageRequest, SendMessageResponse,
};

/// Backend of the single conversation
#[async_trait(?Send)]
pub trait ChatApi {
    /// `GET /api/history`, typed
    async fn fetch_history(&self) -> Result<HistoryResponse, ChatError>;

    /// `GET /api/history` as the raw JSON document, for export
    async fn fetch_history_snapshot(&self) -> Result<serde_json::Value, ChatError>;

    /// `POST /api/message`
    async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, ChatError>;

    /// `POST /api/reset`
    async fn reset(&self) -> Result<(), ChatError>;
}

/// Display surface the view model draws into
pub trait RenderTarget {
    /// Drops every visible row and starts a new render pass.
    fn clear(&self);
    fn append(&self, message: &Message);
    fn scroll_to_latest(&self);
    /// Disables (or re-enables) the submit, reset and export controls.
    fn set_busy(&self, busy: bool);
    fn clear_input(&self);
    fn focus_input(&self);
}

/// Browser facilities that block or touch the outside world
pub trait Platform {
    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;
    fn download(&self, artifact: &ExportArtifact) -> Result<(), String>;
    fn now_millis(&self) -> i64;
}

/// A downloadable history export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content: String,
}
