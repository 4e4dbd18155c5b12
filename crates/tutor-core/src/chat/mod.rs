mod controller;
mod history;
mod message;

pub use controller::ChatController;
pub use history::{ConversationHistory, HistoryEntry};
pub use message::{ChatLog, ChatMessage, ContentKind, MessageBody, Role};
