use serde::{Deserialize, Serialize};

pub const HISTORY_PATH: &str = "/api/history";
pub const MESSAGE_PATH: &str = "/api/message";
pub const RESET_PATH: &str = "/api/reset";

pub const NETWORK_ERROR_TEXT: &str = "Network error. Is the server running?";
pub const FALLBACK_ERROR_TEXT: &str = "Something went wrong.";
pub const RESET_CONFIRM_PROMPT: &str = "Clear the whole conversation?";
pub const EXPORT_FILE_PREFIX: &str = "kindwords_history_";

/// Body of `POST /api/message`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub text: String,
}

impl SendMessageRequest {
    /// Trims the input; `None` when nothing is left to send.
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
        })
    }
}

/// Body returned by `POST /api/message`; either `reply` or `error` is expected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageResponse {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the assistant row should show once a send has settled at the
/// application level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Reply(String),
    ServerError(String),
}

impl ReplyOutcome {
    pub fn text(&self) -> &str {
        match self {
            ReplyOutcome::Reply(t) | ReplyOutcome::ServerError(t) => t,
        }
    }
}

impl SendMessageResponse {
    pub fn into_outcome(self) -> ReplyOutcome {
        match self.reply {
            Some(reply) if !reply.is_empty() => ReplyOutcome::Reply(reply),
            _ => ReplyOutcome::ServerError(
                self.error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR_TEXT.to_string()),
            ),
        }
    }
}

/// Body of `POST /api/reset`. The client does not act on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetResponse {
    #[serde(default)]
    pub ok: bool,
}

pub fn export_file_name(epoch_ms: i64) -> String {
    format!("{}{}.json", EXPORT_FILE_PREFIX, epoch_ms)
}
