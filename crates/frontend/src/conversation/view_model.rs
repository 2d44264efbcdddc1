//! Conversation - View Model

use super::error::ChatError;
use super::ports::{ChatApi, ExportArtifact, Platform, RenderTarget};
use contracts::domain::conversation::{
    export_file_name, Message, ReplyOutcome, SendMessageRequest, NETWORK_ERROR_TEXT,
    RESET_CONFIRM_PROMPT,
};
use std::cell::Cell;

/// Operation holding the conversation while it is busy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Loading,
    Sending,
    Resetting,
    Exporting,
}

/// At most one operation runs at a time; anything requested while busy is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy(Operation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing left after trimming; no request issued.
    Empty,
    /// Another operation was in flight; no request issued.
    Busy,
    Replied,
    ServerError,
    NetworkError,
}

impl SendOutcome {
    /// The server answered, with a reply or an application-level error.
    pub fn reached_server(&self) -> bool {
        matches!(self, SendOutcome::Replied | SendOutcome::ServerError)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Declined,
    Cleared,
}

/// The one chat view: owns nothing but its ports and the phase flag.
pub struct Conversation<A, T, P> {
    api: A,
    target: T,
    platform: P,
    phase: Cell<Phase>,
}

/// Returns the conversation to `Idle` and re-enables controls when dropped.
struct BusyGuard<'a, T: RenderTarget> {
    phase: &'a Cell<Phase>,
    target: &'a T,
}

impl<T: RenderTarget> Drop for BusyGuard<'_, T> {
    fn drop(&mut self) {
        self.phase.set(Phase::Idle);
        self.target.set_busy(false);
    }
}

impl<A: ChatApi, T: RenderTarget, P: Platform> Conversation<A, T, P> {
    pub fn new(api: A, target: T, platform: P) -> Self {
        Self {
            api,
            target,
            platform,
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    fn begin(&self, operation: Operation) -> Result<BusyGuard<'_, T>, ChatError> {
        if let Phase::Busy(current) = self.phase.get() {
            log::warn!("{:?} rejected: {:?} is still in progress", operation, current);
            return Err(ChatError::Busy);
        }
        self.phase.set(Phase::Busy(operation));
        self.target.set_busy(true);
        Ok(BusyGuard {
            phase: &self.phase,
            target: &self.target,
        })
    }

    /// Replaces the display with `messages`, in order, and scrolls to the last one.
    pub fn render(&self, messages: &[Message]) {
        self.target.clear();
        for message in messages {
            self.target.append(message);
        }
        self.target.scroll_to_latest();
    }

    fn push(&self, message: Message) {
        self.target.append(&message);
        self.target.scroll_to_latest();
    }

    /// Fetches the history and renders it in full. Returns the number of rows.
    pub async fn load_history(&self) -> Result<usize, ChatError> {
        let _guard = self.begin(Operation::Loading)?;
        self.reload().await
    }

    async fn reload(&self) -> Result<usize, ChatError> {
        match self.api.fetch_history().await {
            Ok(history) => {
                self.render(&history.messages);
                Ok(history.messages.len())
            }
            Err(e) => {
                log::error!("Failed to load history: {}", e);
                Err(e)
            }
        }
    }

    /// Submits `text`: the user row is appended before the request goes out,
    /// exactly one assistant row after it settles.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let Some(request) = SendMessageRequest::new(text) else {
            return SendOutcome::Empty;
        };
        let guard = match self.begin(Operation::Sending) {
            Ok(guard) => guard,
            Err(_) => return SendOutcome::Busy,
        };

        self.push(Message::user(request.text.clone()));
        self.target.clear_input();

        let outcome = match self.api.send_message(&request).await {
            Ok(response) => match response.into_outcome() {
                ReplyOutcome::Reply(reply) => {
                    self.push(Message::assistant(reply));
                    SendOutcome::Replied
                }
                ReplyOutcome::ServerError(error) => {
                    log::warn!("Server could not reply: {}", error);
                    self.push(Message::assistant(error));
                    SendOutcome::ServerError
                }
            },
            Err(e) => {
                log::error!("Send failed: {}", e);
                self.push(Message::assistant(NETWORK_ERROR_TEXT));
                SendOutcome::NetworkError
            }
        };

        drop(guard);
        self.target.focus_input();
        outcome
    }

    /// Clears the server-side history after confirmation, then re-renders it.
    pub async fn reset(&self) -> Result<ResetOutcome, ChatError> {
        if let Phase::Busy(current) = self.phase.get() {
            log::warn!("Reset rejected: {:?} is still in progress", current);
            return Err(ChatError::Busy);
        }
        if !self.platform.confirm(RESET_CONFIRM_PROMPT) {
            return Ok(ResetOutcome::Declined);
        }

        let _guard = self.begin(Operation::Resetting)?;
        if let Err(e) = self.api.reset().await {
            log::error!("Reset request failed: {}", e);
        }
        self.reload().await?;
        Ok(ResetOutcome::Cleared)
    }

    /// Downloads a fresh history snapshot as pretty-printed JSON.
    pub async fn export(&self) -> Result<ExportArtifact, ChatError> {
        let _guard = self.begin(Operation::Exporting)?;

        let snapshot = self.api.fetch_history_snapshot().await.map_err(|e| {
            log::error!("Failed to fetch history for export: {}", e);
            e
        })?;
        let content = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChatError::Download(e.to_string()))?;
        let artifact = ExportArtifact {
            file_name: export_file_name(self.platform.now_millis()),
            content,
        };

        self.platform
            .download(&artifact)
            .map_err(ChatError::Download)?;
        log::debug!("Exported {}", artifact.file_name);
        Ok(artifact)
    }
}
