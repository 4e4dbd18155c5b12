use crate::api::{AnalysisApi, AnalysisKind, AnalyzeRequest, FeedbackRequest, FollowUpRequest};
use crate::consts::{ERROR_MESSAGE_PREFIX, FEEDBACK_THANKS};
use crate::error::{Result, TutorError};
use crate::image_io::ImageAttachment;

use super::history::ConversationHistory;
use super::message::{ChatLog, MessageBody, Role};

/// Owns the conversation, the visible log and all request bookkeeping.
///
/// Network I/O happens elsewhere: `begin_*` builds a request, the caller runs
/// it (on a worker thread or inline), and `complete_*` folds the result back
/// in. `submit`, `follow_up` and `send_feedback` do all three inline.
#[derive(Debug, Default)]
pub struct ChatController {
    pub kind: AnalysisKind,
    history: ConversationHistory,
    log: ChatLog,
    /// Question of the in-flight submission.
    pending: Option<String>,
    last_response: Option<String>,
    follow_up_pending: bool,
    follow_up_response: Option<MessageBody>,
    notice: Option<String>,
}

impl ChatController {
    pub fn new(kind: AnalysisKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ChatLog {
        &mut self.log
    }

    /// True while a submission is in flight; drives the loading indicator.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_follow_up_pending(&self) -> bool {
        self.follow_up_pending
    }

    /// Most recent successful assistant response, used as context for
    /// follow-up questions and feedback.
    pub fn last_response(&self) -> Option<&str> {
        self.last_response.as_deref()
    }

    pub fn follow_up_response(&self) -> Option<&MessageBody> {
        self.follow_up_response.as_ref()
    }

    /// Pending acknowledgement for the user, cleared on read.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn add_message(&mut self, role: Role, body: MessageBody) {
        self.log.push(role, body);
    }

    /// Validate and record a question, returning the request to send.
    ///
    /// Returns `None` without touching any state when the trimmed question is
    /// blank or another submission is still in flight.
    pub fn begin_submit(
        &mut self,
        question: &str,
        attachment: Option<&ImageAttachment>,
    ) -> Option<AnalyzeRequest> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        if self.is_busy() {
            tracing::debug!("Ignoring submit while a request is in flight");
            return None;
        }

        let conversation_history = match self.history.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize conversation history: {e}");
                "[]".to_string()
            }
        };

        self.add_message(Role::User, MessageBody::plain(question));
        self.pending = Some(question.to_string());
        self.log.request_scroll();

        tracing::info!(kind = %self.kind, history_len = self.history.len(), "Submitting question");
        Some(AnalyzeRequest {
            kind: self.kind,
            question: question.to_string(),
            attachment: attachment.cloned(),
            conversation_history,
        })
    }

    /// Fold the outcome of the in-flight submission back in.
    ///
    /// Appends exactly one assistant message. Only a successful answer is
    /// recorded in the history, as a user/assistant pair.
    pub fn complete_submit(&mut self, result: Result<MessageBody>) {
        let Some(question) = self.pending.take() else {
            tracing::warn!("Received a response with no submission in flight");
            return;
        };

        match result {
            Ok(body) => {
                self.history.push_turn(question, body.text.clone());
                self.last_response = Some(body.text.clone());
                self.add_message(Role::Assistant, body);
            }
            Err(e) => {
                tracing::error!("Analysis request failed: {e}");
                self.add_message(Role::Assistant, error_body(&e));
            }
        }
    }

    /// Submit and wait. Returns `false` if the question was not sent.
    pub fn submit(
        &mut self,
        question: &str,
        attachment: Option<&ImageAttachment>,
        api: &dyn AnalysisApi,
    ) -> bool {
        let Some(request) = self.begin_submit(question, attachment) else {
            return false;
        };
        let result = api.analyze(&request);
        self.complete_submit(result);
        true
    }

    /// Build a follow-up request against the last successful response.
    pub fn begin_follow_up(&mut self, question: &str) -> Result<FollowUpRequest> {
        let question = question.trim();
        if question.is_empty() {
            return Err(TutorError::EmptyQuestion);
        }
        if self.follow_up_pending {
            return Err(TutorError::Busy);
        }
        let context = self.last_response.clone().ok_or(TutorError::MissingContext)?;
        self.follow_up_pending = true;
        Ok(FollowUpRequest::new(question, context))
    }

    /// Replace the follow-up response area with the answer or an error.
    pub fn complete_follow_up(&mut self, result: Result<String>) {
        self.follow_up_pending = false;
        self.follow_up_response = Some(match result {
            Ok(answer) => MessageBody::markup(answer),
            Err(e) => {
                tracing::error!("Error submitting follow-up question: {e}");
                error_body(&e)
            }
        });
    }

    pub fn follow_up(&mut self, question: &str, api: &dyn AnalysisApi) -> Result<()> {
        let request = self.begin_follow_up(question)?;
        let result = api.follow_up(&request);
        self.complete_follow_up(result);
        Ok(())
    }

    pub fn feedback_request(&self, helpful: bool) -> Result<FeedbackRequest> {
        let response = self.last_response.clone().ok_or(TutorError::MissingContext)?;
        Ok(FeedbackRequest { helpful, response })
    }

    /// Success sets the thank-you notice; failure is only logged.
    pub fn complete_feedback(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.notice = Some(FEEDBACK_THANKS.to_string()),
            Err(e) => tracing::error!("Error submitting feedback: {e}"),
        }
    }

    pub fn send_feedback(&mut self, helpful: bool, api: &dyn AnalysisApi) -> Result<()> {
        let request = self.feedback_request(helpful)?;
        let result = api.send_feedback(&request);
        self.complete_feedback(result);
        Ok(())
    }
}

fn error_body(error: &TutorError) -> MessageBody {
    MessageBody::plain(format!("{ERROR_MESSAGE_PREFIX}{error}"))
}
