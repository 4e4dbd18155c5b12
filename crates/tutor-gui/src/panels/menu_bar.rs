use tutor_core::api::AnalysisKind;

use crate::app::TutorApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut TutorApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    app.open_image(ctx);
                }

                if ui
                    .add_enabled(app.preview.attachment.is_some(), egui::Button::new("Clear Image"))
                    .clicked()
                {
                    ui.close();
                    clear_image(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Section", |ui| {
                let busy = app.chat.is_busy();
                for kind in AnalysisKind::ALL {
                    let resp = ui.add_enabled(
                        !busy,
                        egui::Button::selectable(app.chat.kind == kind, kind.to_string()),
                    );
                    if resp.clicked() {
                        ui.close();
                        if app.chat.kind != kind {
                            app.chat.kind = kind;
                            app.ui_state.add_log(format!("Section: {kind}"));
                        }
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Server Info").clicked() {
                    ui.close();
                    app.send_command(WorkerCommand::ServerInfo);
                }
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            app.open_image(ctx);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn clear_image(app: &mut TutorApp) {
    app.preview.texture = None;
    app.preview.image_size = None;
    app.preview.file_path = None;
    app.preview.attachment = None;
    app.preview.zoom.reset();
    app.preview.drag_zoom.release();
    app.ui_state.add_log("Image cleared".into());
}
