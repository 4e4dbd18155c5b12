use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// How a message body is meant to be displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    /// Literal text, shown as-is.
    Plain,
    /// Server HTML. Only ever displayed through `render::render_markup`.
    Markup,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBody {
    pub kind: ContentKind,
    pub text: String,
}

impl MessageBody {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Plain,
            text: text.into(),
        }
    }

    pub fn markup(text: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Markup,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub body: MessageBody,
}

/// The visible chat log. Append-only.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    scroll_to_end: bool,
}

impl ChatLog {
    pub fn push(&mut self, role: Role, body: MessageBody) {
        self.messages.push(ChatMessage { role, body });
        self.scroll_to_end = true;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn request_scroll(&mut self) {
        self.scroll_to_end = true;
    }

    /// Returns `true` once per pending scroll-to-end request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_end)
    }
}
