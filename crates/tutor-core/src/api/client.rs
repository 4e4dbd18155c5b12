use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};

use crate::chat::MessageBody;
use crate::config::ClientConfig;
use crate::error::Result;

use super::endpoint::Endpoints;
use super::request::{AnalyzeRequest, FeedbackRequest, FollowUpRequest};
use super::response::{interpret_analyze, interpret_follow_up, interpret_server_info, ServerInfo};
use super::AnalysisApi;

/// Blocking HTTP client for the analysis server.
///
/// Calls block the current thread; the GUI runs them on its worker thread.
pub struct HttpClient {
    client: Client,
    endpoints: Endpoints,
}

impl HttpClient {
    /// Build a client for the origin selected by `config.hostname`.
    ///
    /// Without `request_timeout_secs` the transport default applies.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let endpoints = config.endpoints();
        tracing::debug!(origin = endpoints.origin(), "HTTP client ready");
        Ok(Self {
            client: builder.build()?,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

fn read(response: Response) -> Result<(u16, String)> {
    let status = response.status().as_u16();
    let body = response.text()?;
    Ok((status, body))
}

impl AnalysisApi for HttpClient {
    fn analyze(&self, request: &AnalyzeRequest) -> Result<MessageBody> {
        let mut form = Form::new();
        if let Some(ref attachment) = request.attachment {
            let part = Part::bytes(attachment.bytes.clone())
                .file_name(attachment.file_name.clone())
                .mime_str(&attachment.mime)?;
            form = form.part("file", part);
        }
        let form = form
            .text("question", request.question.clone())
            .text("conversation_history", request.conversation_history.clone());

        let url = self.endpoints.analyze(request.kind);
        tracing::debug!(%url, has_image = request.attachment.is_some(), "POST analyze");
        let (status, body) = read(self.client.post(&url).multipart(form).send()?)?;
        tracing::debug!(status, bytes = body.len(), "Analyze response");
        interpret_analyze(request.kind, status, &body)
    }

    fn follow_up(&self, request: &FollowUpRequest) -> Result<String> {
        let url = self.endpoints.follow_up();
        tracing::debug!(%url, "POST follow-up");
        let (status, body) = read(self.client.post(&url).json(request).send()?)?;
        interpret_follow_up(status, &body)
    }

    fn send_feedback(&self, request: &FeedbackRequest) -> Result<()> {
        let url = self.endpoints.feedback();
        tracing::debug!(%url, helpful = request.helpful, "POST feedback");
        self.client.post(&url).json(request).send()?;
        Ok(())
    }

    fn server_info(&self) -> Result<ServerInfo> {
        let url = self.endpoints.server_version();
        let (status, body) = read(self.client.get(&url).send()?)?;
        interpret_server_info(status, &body)
    }
}
