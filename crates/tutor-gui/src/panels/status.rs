use tutor_core::api::ServerInfo;

use crate::app::{format_duration, TutorApp};

pub fn show(ctx: &egui::Context, app: &mut TutorApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref size) = app.preview.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.preview.zoom.scale * 100.0));
            ui.separator();
            ui.label(format!("Section: {}", app.chat.kind));
            ui.separator();
            ui.label(format!("Server: {}", app.config.endpoints().origin()));
            if let Some(ref info) = app.ui_state.server_info {
                ui.separator();
                match info {
                    ServerInfo::Version(v) => ui.label(format!("OCR {v}")),
                    ServerInfo::Unavailable(_) => ui.label("OCR unavailable"),
                };
            }
            if let Some(elapsed) = app.ui_state.last_elapsed {
                ui.separator();
                ui.label(format!("Last answer: {}", format_duration(elapsed)));
            }
        });

        ui.add_space(2.0);
    });
}
