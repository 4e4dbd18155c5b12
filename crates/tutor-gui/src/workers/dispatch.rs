use std::sync::mpsc;

use tutor_core::api::HttpClient;
use tutor_core::config::ClientConfig;

use crate::messages::{WorkerCommand, WorkerResult};

use super::api;

/// Spawn the worker thread. Returns the command sender.
///
/// The worker owns the HTTP client and runs one request at a time. If the
/// client cannot be built the thread exits and later sends fail.
pub fn spawn_worker(
    config: ClientConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("tutor-worker".into())
        .spawn(move || {
            let client = match HttpClient::new(&config) {
                Ok(client) => client,
                Err(e) => {
                    send_error(&result_tx, &ctx, format!("Failed to start HTTP client: {e}"));
                    return;
                }
            };
            send_log(
                &result_tx,
                &ctx,
                format!("Using {}", client.endpoints().origin()),
            );
            worker_loop(cmd_rx, result_tx, ctx, client);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    client: HttpClient,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Analyze { request } => {
                api::handle_analyze(&client, &request, &tx, &ctx);
            }
            WorkerCommand::FollowUp { request } => {
                api::handle_follow_up(&client, &request, &tx, &ctx);
            }
            WorkerCommand::Feedback { request } => {
                api::handle_feedback(&client, &request, &tx, &ctx);
            }
            WorkerCommand::ServerInfo => {
                api::handle_server_info(&client, &tx, &ctx);
            }
        }
    }
    tracing::debug!("Worker loop finished");
}
