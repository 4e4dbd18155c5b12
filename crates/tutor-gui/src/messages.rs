use std::path::PathBuf;
use std::time::Duration;

use tutor_core::api::{AnalyzeRequest, FeedbackRequest, FollowUpRequest, ServerInfo};
use tutor_core::chat::MessageBody;
use tutor_core::error::TutorError;
use tutor_core::image_io::{ImageAttachment, PreviewImage};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Submit a question (with optional image) for analysis.
    Analyze { request: AnalyzeRequest },

    /// Ask about the last answer.
    FollowUp { request: FollowUpRequest },

    /// Rate the last answer. Fire-and-forget.
    Feedback { request: FeedbackRequest },

    /// Query the server's OCR engine version.
    ServerInfo,
}

/// Results sent from worker (and file dialog) threads back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        attachment: ImageAttachment,
        preview: PreviewImage,
    },

    AnalyzeComplete {
        result: Result<MessageBody, TutorError>,
        elapsed: Duration,
    },

    FollowUpComplete {
        result: Result<String, TutorError>,
    },

    FeedbackComplete {
        result: Result<(), TutorError>,
    },

    ServerInfo {
        info: ServerInfo,
    },

    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
