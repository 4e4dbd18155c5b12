use crate::app::TutorApp;
use crate::panels::helpers::{section_header, show_blocks};

/// Follow-up question, its answer and the feedback buttons. Everything here
/// needs a previous answer, so the section is disabled until one exists.
pub(crate) fn follow_up_section(ui: &mut egui::Ui, app: &mut TutorApp) {
    let has_context = app.chat.last_response().is_some();
    let pending = app.chat.is_follow_up_pending();

    let status = if pending {
        Some("Waiting...")
    } else if !has_context {
        Some("No answer yet")
    } else {
        None
    };
    section_header(ui, "Follow-up", status);

    ui.add_enabled_ui(has_context, |ui| {
        ui.horizontal(|ui| {
            let input = ui.add_enabled(
                !pending,
                egui::TextEdit::singleline(&mut app.ui_state.follow_up_question)
                    .desired_width(ui.available_width() - 70.0)
                    .hint_text("Ask about the last answer"),
            );
            let entered =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(!pending, egui::Button::new("Ask"))
                .clicked();
            if clicked || entered {
                app.submit_follow_up();
            }
        });

        if let Some(body) = app.chat.follow_up_response() {
            let blocks = app.ui_state.rendered.follow_up(body);
            egui::ScrollArea::vertical()
                .id_salt("follow_up_response")
                .max_height(140.0)
                .show(ui, |ui| {
                    show_blocks(ui, blocks);
                });
        }

        ui.horizontal(|ui| {
            ui.label("Was this helpful?");
            if ui.button("Yes").clicked() {
                app.submit_feedback(true);
            }
            if ui.button("No").clicked() {
                app.submit_feedback(false);
            }
        });
    });
}
