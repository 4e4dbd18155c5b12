use tutor_core::chat::Role;

use crate::app::TutorApp;
use crate::panels::follow_up;
use crate::panels::helpers::{role_color, section_header, show_blocks};

const CHAT_PANEL_WIDTH: f32 = 460.0;
const INPUT_ROWS: usize = 3;

pub fn show(ctx: &egui::Context, app: &mut TutorApp) {
    egui::SidePanel::right("chat")
        .default_width(CHAT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::TopBottomPanel::bottom("chat_input")
                .resizable(false)
                .show_inside(ui, |ui| {
                    question_section(ui, app);
                    ui.separator();
                    follow_up::follow_up_section(ui, app);
                    ui.add_space(4.0);
                });

            let status = format!("{} messages", app.chat.log().len());
            section_header(ui, &format!("{} tutor", app.chat.kind), Some(&status));
            ui.separator();
            conversation(ui, app);
        });
}

fn conversation(ui: &mut egui::Ui, app: &mut TutorApp) {
    let scroll_requested = app.chat.log_mut().take_scroll_request();
    let busy = app.chat.is_busy();
    app.ui_state.rendered.sync_log(app.chat.log().messages());

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if app.chat.log().is_empty() {
                ui.label(
                    egui::RichText::new("Ask a question to begin")
                        .color(egui::Color32::from_gray(120)),
                );
            }

            for (i, message) in app.chat.log().messages().iter().enumerate() {
                egui::Frame::NONE
                    .fill(role_color(message.role))
                    .inner_margin(8.0)
                    .corner_radius(4.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let who = match message.role {
                            Role::User => "You",
                            Role::Assistant => "Tutor",
                        };
                        ui.small(who);
                        show_blocks(ui, app.ui_state.rendered.log_blocks(i));
                    });
                ui.add_space(4.0);
            }

            if busy {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Thinking...");
                });
            }

            if scroll_requested {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn question_section(ui: &mut egui::Ui, app: &mut TutorApp) {
    let busy = app.chat.is_busy();

    ui.horizontal(|ui| {
        ui.strong("Question");
        if let Some(name) = app.preview.file_name() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(format!("Image: {name}"));
            });
        }
    });

    let input = ui.add_enabled(
        !busy,
        egui::TextEdit::multiline(&mut app.ui_state.question)
            .desired_rows(INPUT_ROWS)
            .desired_width(f32::INFINITY)
            .hint_text("Type your question (Ctrl+Enter to send)"),
    );
    let send_shortcut = input.has_focus()
        && ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));

    ui.horizontal(|ui| {
        let can_submit = !busy && !app.ui_state.question.trim().is_empty();
        let clicked = ui
            .add_enabled(can_submit, egui::Button::new("Submit"))
            .clicked();
        if busy {
            ui.spinner();
        }
        if clicked || send_shortcut {
            app.submit_question();
        }
    });
}
