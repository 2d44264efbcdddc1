use thiserror::Error;

/// Failures surfaced by conversation operations.
///
/// Application-level problems (`{ error: ... }` bodies) are not errors here:
/// they are rendered as assistant messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Another operation is in progress")]
    Busy,

    #[error("Download failed: {0}")]
    Download(String),
}

impl From<gloo_net::Error> for ChatError {
    fn from(e: gloo_net::Error) -> Self {
        ChatError::Transport(e.to_string())
    }
}
