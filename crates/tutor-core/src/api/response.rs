use serde::Deserialize;
use serde_json::Value;

use crate::chat::MessageBody;
use crate::error::{Result, TutorError};

use super::endpoint::AnalysisKind;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

#[derive(Deserialize)]
struct AnswerBody {
    answer: String,
}

#[derive(Deserialize)]
struct VersionBody {
    version: Option<Value>,
    error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServerInfo {
    /// OCR engine version reported by the server.
    Version(String),
    /// The server is up but its OCR engine is not.
    Unavailable(String),
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error text for a non-success response.
///
/// Uses the JSON `detail` field when the body has one, otherwise a generic
/// message naming the status code.
pub fn error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| match d {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });
    detail.unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

fn api_error(status: u16, body: &str) -> TutorError {
    TutorError::Api {
        status,
        message: error_message(status, body),
    }
}

/// Turn an analysis response into the assistant message body.
///
/// Verbal answers are HTML and kept verbatim; the other sections answer with
/// JSON whose `answer` is shown as plain text.
pub fn interpret_analyze(kind: AnalysisKind, status: u16, body: &str) -> Result<MessageBody> {
    if !is_success(status) {
        return Err(api_error(status, body));
    }
    if kind.returns_markup() {
        return Ok(MessageBody::markup(body));
    }
    let parsed: AnswerBody = serde_json::from_str(body)?;
    Ok(MessageBody::plain(parsed.answer))
}

pub fn interpret_follow_up(status: u16, body: &str) -> Result<String> {
    if !is_success(status) {
        return Err(api_error(status, body));
    }
    let parsed: AnswerBody = serde_json::from_str(body)?;
    Ok(parsed.answer)
}

pub fn interpret_server_info(status: u16, body: &str) -> Result<ServerInfo> {
    if !is_success(status) {
        return Err(api_error(status, body));
    }
    let parsed: VersionBody = serde_json::from_str(body)?;
    if let Some(error) = parsed.error {
        return Ok(ServerInfo::Unavailable(error));
    }
    let version = match parsed.version {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    };
    Ok(ServerInfo::Version(version))
}
