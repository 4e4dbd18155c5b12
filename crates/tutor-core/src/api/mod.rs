//! HTTP contracts of the analysis server.

mod client;
mod endpoint;
mod request;
mod response;

pub use client::HttpClient;
pub use endpoint::{is_local_hostname, select_origin, AnalysisKind, Endpoints};
pub use request::{AnalyzeRequest, FeedbackRequest, FollowUpRequest};
pub use response::{
    error_message, interpret_analyze, interpret_follow_up, interpret_server_info, ServerInfo,
};

use crate::chat::MessageBody;
use crate::error::Result;

/// The remote analysis service.
///
/// `HttpClient` is the real implementation; tests and offline callers can
/// provide their own.
pub trait AnalysisApi {
    /// Submit a question (and optional image) for analysis.
    fn analyze(&self, request: &AnalyzeRequest) -> Result<MessageBody>;

    /// Ask a follow-up question about a previous answer. Returns the answer
    /// markup.
    fn follow_up(&self, request: &FollowUpRequest) -> Result<String>;

    /// Record whether a response was helpful. The reply body is ignored.
    fn send_feedback(&self, request: &FeedbackRequest) -> Result<()>;

    fn server_info(&self) -> Result<ServerInfo>;
}
