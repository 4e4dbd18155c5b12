use std::path::PathBuf;

use tutor_core::image_io::ImageAttachment;
use tutor_core::zoom::{DragZoom, ZoomState};

/// Image preview display state.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    /// Decoded image size in pixels.
    pub image_size: Option<[usize; 2]>,
    pub file_path: Option<PathBuf>,
    /// The selected file, uploaded with the next question.
    pub attachment: Option<ImageAttachment>,
    pub zoom: ZoomState,
    pub drag_zoom: DragZoom,
    /// Overlay icon is shown while the pointer is over the preview.
    pub overlay_visible: bool,
}

impl PreviewState {
    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }
}
