use tutor_core::zoom::{CursorHint, Offset, OverlayIcon, WheelDirection};

use crate::app::TutorApp;

const OVERLAY_SIZE: f32 = 28.0;
const OVERLAY_MARGIN: f32 = 8.0;

pub fn show(ctx: &egui::Context, app: &mut TutorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .preview
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        let Some((texture_id, tex_size)) = texture_info else {
            show_placeholder(ui);
            return;
        };

        let image_size = resolve_image_size(app, tex_size);
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        app.preview.overlay_visible = response.hovered() || app.preview.zoom.dragging;

        handle_wheel(ui, &response, app);
        handle_drag(ui, &response, app);

        if response.double_clicked() {
            app.preview.zoom.toggle();
        }

        let img_rect = compute_img_rect(rect, image_size, app);
        draw_image(ui, rect, texture_id, img_rect);

        if app.preview.overlay_visible && overlay_button(ui, rect, app.preview.zoom.overlay_icon()) {
            app.preview.zoom.toggle();
        }

        if response.hovered() || app.preview.zoom.dragging {
            ctx.set_cursor_icon(cursor_icon(app.preview.zoom.cursor()));
        }

        draw_file_label(ui, rect, app.preview.file_name().as_deref());
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn resolve_image_size(app: &TutorApp, tex_size: [f32; 2]) -> egui::Vec2 {
    if let Some(size) = app.preview.image_size {
        egui::vec2(size[0] as f32, size[1] as f32)
    } else {
        egui::vec2(tex_size[0], tex_size[1])
    }
}

/// One zoom step per wheel event over the image. The scroll is consumed so
/// nothing else scrolls underneath.
fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut TutorApp) {
    if !response.hovered() {
        return;
    }
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }
    let direction = if scroll > 0.0 {
        WheelDirection::Up
    } else {
        WheelDirection::Down
    };
    app.preview.zoom.wheel(direction);
    ui.ctx().input_mut(|i| {
        i.raw_scroll_delta = egui::Vec2::ZERO;
        i.smooth_scroll_delta = egui::Vec2::ZERO;
    });
}

/// Primary-button drag pans a zoomed image and, at the same time, zooms by
/// vertical movement. Both are anchored at the press position, not where
/// egui's drag threshold was crossed.
fn handle_drag(ui: &egui::Ui, response: &egui::Response, app: &mut TutorApp) {
    let pointer = ui.input(|i| i.pointer.interact_pos());
    let press_origin = ui.input(|i| i.pointer.press_origin()).or(pointer);
    let primary_down = ui.input(|i| i.pointer.primary_down());

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = press_origin {
            app.preview.zoom.begin_drag(Offset::new(pos.x, pos.y));
            app.preview.drag_zoom.press(pos.y);
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = pointer {
            app.preview.zoom.drag_to(Offset::new(pos.x, pos.y));
            app.preview
                .drag_zoom
                .move_to(pos.y, primary_down, &mut app.preview.zoom);
        }
    }

    if response.drag_stopped() {
        app.preview.zoom.end_drag();
        app.preview.drag_zoom.release();
    }
}

/// The image is fitted to the panel, then scaled and translated by the zoom
/// state around the panel center.
fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &TutorApp) -> egui::Rect {
    let fit = (rect.width() / image_size.x)
        .min(rect.height() / image_size.y)
        .min(1.0);
    let zoom = &app.preview.zoom;
    let scaled = image_size * fit * zoom.scale;
    let center = rect.center() + egui::vec2(zoom.translate.x, zoom.translate.y);
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(ui: &egui::Ui, clip: egui::Rect, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter_at(clip).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Returns `true` when clicked.
fn overlay_button(ui: &mut egui::Ui, rect: egui::Rect, icon: OverlayIcon) -> bool {
    let (glyph, hint) = match icon {
        OverlayIcon::ZoomIn => ("+", "Zoom in"),
        OverlayIcon::ZoomOut => ("-", "Zoom out"),
    };
    let button_rect = egui::Rect::from_min_size(
        rect.right_top() + egui::vec2(-OVERLAY_SIZE - OVERLAY_MARGIN, OVERLAY_MARGIN),
        egui::vec2(OVERLAY_SIZE, OVERLAY_SIZE),
    );
    ui.put(
        button_rect,
        egui::Button::new(egui::RichText::new(glyph).size(18.0)).corner_radius(OVERLAY_SIZE / 2.0),
    )
    .on_hover_text(hint)
    .clicked()
}

fn cursor_icon(hint: CursorHint) -> egui::CursorIcon {
    match hint {
        CursorHint::Pointer => egui::CursorIcon::PointingHand,
        CursorHint::Move => egui::CursorIcon::Move,
        CursorHint::Grabbing => egui::CursorIcon::Grabbing,
    }
}

fn draw_file_label(ui: &egui::Ui, rect: egui::Rect, label: Option<&str>) {
    let Some(label) = label else {
        return;
    };
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image of the problem (Ctrl+O)")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
