use tutor_core::chat::{ChatMessage, MessageBody};
use tutor_core::render::{render_body, Block};

/// Rendered blocks for the chat log and the follow-up answer. Each message
/// is parsed once, not every frame.
#[derive(Default)]
pub struct RenderCache {
    log: Vec<Vec<Block>>,
    follow_up: Option<(MessageBody, Vec<Block>)>,
}

impl RenderCache {
    /// The log only grows, so render whatever was appended since last time.
    pub fn sync_log(&mut self, messages: &[ChatMessage]) {
        self.log.truncate(messages.len());
        for message in &messages[self.log.len()..] {
            self.log.push(render_body(&message.body));
        }
    }

    pub fn log_blocks(&self, index: usize) -> &[Block] {
        self.log.get(index).map_or(&[], Vec::as_slice)
    }

    pub fn follow_up(&mut self, body: &MessageBody) -> &[Block] {
        let stale = self
            .follow_up
            .as_ref()
            .map_or(true, |(cached, _)| cached != body);
        if stale {
            self.follow_up = Some((body.clone(), render_body(body)));
        }
        self.follow_up
            .as_ref()
            .map_or(&[], |(_, blocks)| blocks.as_slice())
    }
}
