mod preview;
mod rendered;
mod ui;

pub use preview::PreviewState;
pub use rendered::RenderCache;
pub use ui::UIState;
