use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    New,
    Resume,
    Close,
}

/// A message delivered by the transport from one address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InboundMessage {
    pub from_addr: String,
    #[serde(default)]
    pub content: Option<String>,
    /// `None` for ordinary content delivery
    #[serde(default)]
    pub session_event: Option<SessionEvent>,
}

impl InboundMessage {
    pub fn session_start(from_addr: impl Into<String>) -> Self {
        Self {
            from_addr: from_addr.into(),
            content: None,
            session_event: Some(SessionEvent::New),
        }
    }

    pub fn content(from_addr: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            from_addr: from_addr.into(),
            content: Some(content.into()),
            session_event: None,
        }
    }
}

/// A message for the transport to deliver to one address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundMessage {
    pub to_addr: String,
    pub content: String,
}

impl OutboundMessage {
    pub fn new(to_addr: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            to_addr: to_addr.into(),
            content: content.into(),
        }
    }
}
