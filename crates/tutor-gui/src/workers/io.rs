use std::sync::mpsc;

use tutor_core::image_io::load_image;

use crate::messages::WorkerResult;

use super::{send, send_error};

/// Show a file dialog and load the chosen image off the UI thread.
///
/// Cancelling the dialog is a no-op.
pub fn pick_image(result_tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) {
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };

        match load_image(&path) {
            Ok((attachment, preview)) => send(&result_tx, &ctx, WorkerResult::ImageLoaded {
                path,
                attachment,
                preview,
            }),
            Err(e) => send_error(
                &result_tx,
                &ctx,
                format!("Failed to open image {}: {e}", path.display()),
            ),
        }
    });
}
