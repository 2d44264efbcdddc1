//! Wire types for the single KindWords conversation.
//!
//! Shared between the browser client and any server implementing
//! `/api/history`, `/api/message` and `/api/reset`.

pub mod dto;
pub mod message;

pub use dto::{
    export_file_name, ReplyOutcome, ResetResponse, SendMessageRequest, SendMessageResponse,
    EXPORT_FILE_PREFIX, FALLBACK_ERROR_TEXT, HISTORY_PATH, MESSAGE_PATH, NETWORK_ERROR_TEXT,
    RESET_CONFIRM_PROMPT, RESET_PATH,
};
pub use message::{HistoryResponse, Message, Role};
