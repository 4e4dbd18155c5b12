use std::sync::mpsc;
use std::time::Instant;

use tutor_core::api::{AnalysisApi, AnalyzeRequest, FeedbackRequest, FollowUpRequest};

use crate::messages::WorkerResult;

use super::{send, send_error};

pub(super) fn handle_analyze(
    api: &dyn AnalysisApi,
    request: &AnalyzeRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    let result = api.analyze(request);
    send(tx, ctx, WorkerResult::AnalyzeComplete {
        result,
        elapsed: start.elapsed(),
    });
}

pub(super) fn handle_follow_up(
    api: &dyn AnalysisApi,
    request: &FollowUpRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let result = api.follow_up(request);
    send(tx, ctx, WorkerResult::FollowUpComplete { result });
}

pub(super) fn handle_feedback(
    api: &dyn AnalysisApi,
    request: &FeedbackRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let result = api.send_feedback(request);
    send(tx, ctx, WorkerResult::FeedbackComplete { result });
}

pub(super) fn handle_server_info(
    api: &dyn AnalysisApi,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match api.server_info() {
        Ok(info) => send(tx, ctx, WorkerResult::ServerInfo { info }),
        Err(e) => send_error(tx, ctx, format!("Server info unavailable: {e}")),
    }
}
