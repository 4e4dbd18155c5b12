use serde::Serialize;

use crate::image_io::ImageAttachment;

use super::endpoint::AnalysisKind;

/// Multipart body of an analysis submission.
#[derive(Clone, Debug)]
pub struct AnalyzeRequest {
    pub kind: AnalysisKind,
    pub question: String,
    pub attachment: Option<ImageAttachment>,
    /// JSON array of the history as it stood before this question.
    pub conversation_history: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FollowUpRequest {
    pub question: String,
    pub previous_context: String,
}

impl FollowUpRequest {
    pub fn new(question: impl Into<String>, previous_context: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            previous_context: previous_context.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackRequest {
    pub helpful: bool,
    pub response: String,
}
