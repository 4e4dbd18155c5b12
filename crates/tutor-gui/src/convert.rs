use tutor_core::image_io::PreviewImage;

/// Convert decoded RGBA pixels to an egui ColorImage.
pub fn preview_to_color_image(preview: &PreviewImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [preview.width as usize, preview.height as usize],
        &preview.rgba,
    )
}
