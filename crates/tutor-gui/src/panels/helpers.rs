use tutor_core::chat::Role;
use tutor_core::render::{Block, BlockKind};

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    egui::Frame::NONE.inner_margin(4.0).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(label);
            if let Some(s) = status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(s);
                });
            }
        });
    });
}

pub(crate) fn role_color(role: Role) -> egui::Color32 {
    match role {
        Role::User => egui::Color32::from_rgb(40, 70, 110),
        Role::Assistant => egui::Color32::from_gray(45),
    }
}

/// Draw a rendered message body. Only the block model from the safe
/// renderer reaches the UI, never server-provided HTML.
pub(crate) fn show_blocks(ui: &mut egui::Ui, blocks: &[Block]) {
    for block in blocks {
        show_block(ui, block);
    }
}

fn show_block(ui: &mut egui::Ui, block: &Block) {
    let (size, strong) = match block.kind {
        BlockKind::Heading(1) => (20.0, true),
        BlockKind::Heading(2) => (18.0, true),
        BlockKind::Heading(_) => (16.0, true),
        _ => (14.0, false),
    };

    let mut job = egui::text::LayoutJob::default();
    if let BlockKind::ListItem { ref marker, depth } = block.kind {
        let indent = "    ".repeat(depth.saturating_sub(1));
        job.append(
            &format!("{indent}{marker} "),
            0.0,
            text_format(ui, size, false, false, false),
        );
    }
    for span in &block.spans {
        job.append(
            &span.text,
            0.0,
            text_format(ui, size, strong || span.bold, span.italic, span.code),
        );
    }
    job.wrap.max_width = ui.available_width();
    ui.label(job);
}

fn text_format(ui: &egui::Ui, size: f32, bold: bool, italic: bool, code: bool) -> egui::TextFormat {
    let visuals = ui.visuals();
    let font_id = if code {
        egui::FontId::monospace(size - 1.0)
    } else {
        egui::FontId::proportional(size)
    };
    egui::TextFormat {
        font_id,
        color: if bold {
            visuals.strong_text_color()
        } else {
            visuals.text_color()
        },
        italics: italic,
        background: if code {
            visuals.code_bg_color
        } else {
            egui::Color32::TRANSPARENT
        },
        ..Default::default()
    }
}
