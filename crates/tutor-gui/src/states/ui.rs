use std::time::Duration;

use tutor_core::api::ServerInfo;

use super::RenderCache;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Main question input.
    pub question: String,
    /// Follow-up question input.
    pub follow_up_question: String,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub server_info: Option<ServerInfo>,
    /// Round-trip time of the last analysis.
    pub last_elapsed: Option<Duration>,

    /// Blocking acknowledgement dialog text.
    pub notice: Option<String>,

    pub rendered: RenderCache,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
