use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// CSS class of a rendered row, e.g. `"msg user"`.
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::User => "msg user",
            Role::Assistant => "msg assistant",
        }
    }
}

/// One history entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Server-side ISO-8601 timestamp; absent on optimistic messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            ts: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            ts: None,
        }
    }
}

/// Body of `GET /api/history`, oldest message first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryResponse {
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"assistant\"").unwrap(),
            Role::Assistant
        );
        assert!(serde_json::from_str::<Role>("\"system\"").is_err());
    }

    #[test]
    fn test_history_with_timestamps() {
        let raw = r#"{"messages":[
            {"role":"user","content":"hi","ts":"2024-03-15T14:02:26.123Z"},
            {"role":"assistant","content":"hello"}
        ]}"#;
        let history: HistoryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(history.messages.len(), 2);
        assert_eq!(
            history.messages[0].ts.as_deref(),
            Some("2024-03-15T14:02:26.123Z")
        );
        assert_eq!(history.messages[1], Message::assistant("hello"));
    }

    #[test]
    fn test_optimistic_message_omits_ts() {
        let json = serde_json::to_string(&Message::user("x")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"x"}"#);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Role::User.css_class(), "msg user");
        assert_eq!(Role::Assistant.css_class(), "msg assistant");
    }
}
