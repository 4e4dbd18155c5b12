use std::sync::mpsc;

use tutor_core::api::ServerInfo;
use tutor_core::chat::ChatController;
use tutor_core::config::ClientConfig;
use tutor_core::error::TutorError;
use tutor_core::image_io::PreviewImage;

use crate::convert::preview_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{PreviewState, UIState};
use crate::workers;

pub struct TutorApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub chat: ChatController,
    pub ui_state: UIState,
    pub preview: PreviewState,
    pub config: ClientConfig,
    pub show_about: bool,
}

impl TutorApp {
    pub fn new(ctx: &egui::Context, config: ClientConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(config.clone(), result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            chat: ChatController::new(config.analysis),
            ui_state: UIState::default(),
            preview: PreviewState::default(),
            config,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    path,
                    attachment,
                    preview,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        preview.width,
                        preview.height
                    ));
                    self.update_preview_texture(ctx, &preview);
                    self.preview.attachment = Some(attachment);
                    self.preview.file_path = Some(path);
                    self.preview.zoom.reset();
                    self.preview.drag_zoom.release();
                }
                WorkerResult::AnalyzeComplete { result, elapsed } => {
                    if let Err(ref e) = result {
                        self.ui_state.add_log(format!("ERROR: {e}"));
                    } else {
                        self.ui_state
                            .add_log(format!("Answer received in {}", format_duration(elapsed)));
                    }
                    self.ui_state.last_elapsed = Some(elapsed);
                    self.chat.complete_submit(result);
                }
                WorkerResult::FollowUpComplete { result } => {
                    self.chat.complete_follow_up(result);
                }
                WorkerResult::FeedbackComplete { result } => {
                    self.chat.complete_feedback(result);
                    if let Some(notice) = self.chat.take_notice() {
                        self.ui_state.notice = Some(notice);
                    }
                }
                WorkerResult::ServerInfo { info } => {
                    self.ui_state.add_log(match &info {
                        ServerInfo::Version(v) => format!("Server OCR engine: {v}"),
                        ServerInfo::Unavailable(e) => format!("Server OCR engine unavailable: {e}"),
                    });
                    self.ui_state.server_info = Some(info);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_preview_texture(&mut self, ctx: &egui::Context, preview: &PreviewImage) {
        let image = preview_to_color_image(preview);
        let size = image.size;
        let texture = ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
        self.preview.texture = Some(texture);
        self.preview.image_size = Some(size);
    }

    /// Returns `false` if the worker is gone.
    pub fn send_command(&self, cmd: WorkerCommand) -> bool {
        if self.cmd_tx.send(cmd).is_err() {
            tracing::error!("Worker thread is not running");
            return false;
        }
        true
    }

    /// Submit the question box contents with the selected image.
    pub fn submit_question(&mut self) {
        let Some(request) = self
            .chat
            .begin_submit(&self.ui_state.question, self.preview.attachment.as_ref())
        else {
            return;
        };
        self.ui_state.question.clear();
        if !self.send_command(WorkerCommand::Analyze { request }) {
            self.chat.complete_submit(Err(worker_stopped()));
        }
    }

    pub fn submit_follow_up(&mut self) {
        match self.chat.begin_follow_up(&self.ui_state.follow_up_question) {
            Ok(request) => {
                if !self.send_command(WorkerCommand::FollowUp { request }) {
                    self.chat.complete_follow_up(Err(worker_stopped()));
                }
            }
            Err(TutorError::EmptyQuestion) => {}
            Err(e) => self.ui_state.add_log(format!("Follow-up not sent: {e}")),
        }
    }

    pub fn submit_feedback(&mut self, helpful: bool) {
        match self.chat.feedback_request(helpful) {
            Ok(request) => {
                self.send_command(WorkerCommand::Feedback { request });
            }
            Err(e) => self.ui_state.add_log(format!("Feedback not sent: {e}")),
        }
    }

    pub fn open_image(&self, ctx: &egui::Context) {
        workers::pick_image(self.result_tx.clone(), ctx.clone());
    }
}

fn worker_stopped() -> TutorError {
    TutorError::Io(std::io::Error::other("worker thread stopped"))
}

impl eframe::App for TutorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::chat::show(ctx, self);
        panels::preview::show(ctx, self);

        if let Some(notice) = self.ui_state.notice.clone() {
            egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(notice);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.ui_state.notice = None;
                    }
                });
            });
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About GRE Tutor")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("GRE Tutor");
                        ui.label("Ask questions about GRE problems");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

pub(crate) fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
