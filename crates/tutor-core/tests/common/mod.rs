use std::cell::{Cell, RefCell};
use std::io::Read;
use std::thread::JoinHandle;

use tutor_core::api::{
    interpret_analyze, interpret_follow_up, interpret_server_info, AnalysisApi, AnalyzeRequest,
    FeedbackRequest, FollowUpRequest, ServerInfo,
};
use tutor_core::chat::MessageBody;
use tutor_core::error::{Result, TutorError};

/// In-process stand-in for the analysis server.
///
/// Every call answers with the configured status and body, run through the
/// same response interpretation as the real client.
pub struct FakeApi {
    pub status: u16,
    pub body: String,
    pub feedback_fails: bool,
    pub analyze_calls: Cell<usize>,
    pub last_analyze: RefCell<Option<AnalyzeRequest>>,
    pub last_follow_up: RefCell<Option<FollowUpRequest>>,
    pub last_feedback: RefCell<Option<FeedbackRequest>>,
}

impl FakeApi {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            feedback_fails: false,
            analyze_calls: Cell::new(0),
            last_analyze: RefCell::new(None),
            last_follow_up: RefCell::new(None),
            last_feedback: RefCell::new(None),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(200, body)
    }
}

impl AnalysisApi for FakeApi {
    fn analyze(&self, request: &AnalyzeRequest) -> Result<MessageBody> {
        self.analyze_calls.set(self.analyze_calls.get() + 1);
        *self.last_analyze.borrow_mut() = Some(request.clone());
        interpret_analyze(request.kind, self.status, &self.body)
    }

    fn follow_up(&self, request: &FollowUpRequest) -> Result<String> {
        *self.last_follow_up.borrow_mut() = Some(request.clone());
        interpret_follow_up(self.status, &self.body)
    }

    fn send_feedback(&self, request: &FeedbackRequest) -> Result<()> {
        *self.last_feedback.borrow_mut() = Some(request.clone());
        if self.feedback_fails {
            return Err(TutorError::Io(std::io::Error::other("connection refused")));
        }
        Ok(())
    }

    fn server_info(&self) -> Result<ServerInfo> {
        interpret_server_info(self.status, &self.body)
    }
}

/// What the test server saw.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub content_type: String,
    pub body: String,
}

/// Serve exactly one request on an ephemeral local port.
///
/// Returns the origin (`http://127.0.0.1:PORT`) and a handle that yields the
/// recorded request once the response has been sent.
pub fn serve_once(
    status: u16,
    body: &str,
    content_type: &str,
) -> (String, JoinHandle<RecordedRequest>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let body = body.to_string();
    let content_type = content_type.to_string();

    let handle = std::thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let mut received = Vec::new();
        request.as_reader().read_to_end(&mut received).unwrap();

        let recorded = RecordedRequest {
            method: request.method().to_string(),
            url: request.url().to_string(),
            content_type: request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().to_string())
                .unwrap_or_default(),
            body: String::from_utf8_lossy(&received).to_string(),
        };

        let header =
            tiny_http::Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()).unwrap();
        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(header);
        request.respond(response).unwrap();
        recorded
    });

    (format!("http://127.0.0.1:{port}"), handle)
}

/// Write a small solid-color PNG and return its path inside `dir`.
pub fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}
