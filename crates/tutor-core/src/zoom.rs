//! Zoom and pan state for the image preview.
//!
//! All transitions are pure functions of the current state and an input
//! delta. The scale is clamped to `[MIN_ZOOM_SCALE, MAX_ZOOM_SCALE]` after
//! every change, so any sequence of wheel ticks, toggles and drag-zoom
//! deltas leaves it in range.

use crate::consts::{DRAG_ZOOM_DIVISOR, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, TOGGLE_ZOOM_DELTA, ZOOM_STEP};

/// Screen-space offset in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

impl WheelDirection {
    /// Zoom delta for one wheel tick: up zooms in, down zooms out.
    pub fn delta(self) -> f32 {
        match self {
            WheelDirection::Up => 1.0,
            WheelDirection::Down => -1.0,
        }
    }
}

/// Pointer affordance for the preview image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Pointer,
    Move,
    Grabbing,
}

/// Glyph shown in the zoom overlay button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayIcon {
    ZoomIn,
    ZoomOut,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomState {
    pub scale: f32,
    pub translate: Offset,
    pub dragging: bool,
    /// Pointer position minus translation at drag start.
    pub drag_anchor: Option<Offset>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: MIN_ZOOM_SCALE,
            translate: Offset::ZERO,
            dragging: false,
            drag_anchor: None,
        }
    }
}

impl ZoomState {
    /// Back to identity: scale 1, no translation, no drag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_ZOOM_SCALE
    }

    /// `scale += delta * ZOOM_STEP`, clamped. Non-finite deltas are ignored.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        let next = self.scale + delta * ZOOM_STEP;
        self.scale = next.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
    }

    pub fn wheel(&mut self, direction: WheelDirection) {
        self.zoom(direction.delta());
    }

    /// Double-click and overlay click: zoomed resets, identity jumps to max.
    pub fn toggle(&mut self) {
        if self.is_zoomed() {
            self.reset();
        } else {
            self.zoom(TOGGLE_ZOOM_DELTA);
        }
    }

    /// Start panning. Ignored at scale 1.
    pub fn begin_drag(&mut self, pointer: Offset) {
        if !self.is_zoomed() {
            return;
        }
        self.dragging = true;
        self.drag_anchor = Some(pointer - self.translate);
    }

    pub fn drag_to(&mut self, pointer: Offset) {
        if !self.dragging {
            return;
        }
        if let Some(anchor) = self.drag_anchor {
            self.translate = pointer - anchor;
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_anchor = None;
    }

    pub fn cursor(&self) -> CursorHint {
        if self.dragging {
            CursorHint::Grabbing
        } else if self.is_zoomed() {
            CursorHint::Move
        } else {
            CursorHint::Pointer
        }
    }

    pub fn overlay_icon(&self) -> OverlayIcon {
        if self.is_zoomed() {
            OverlayIcon::ZoomOut
        } else {
            OverlayIcon::ZoomIn
        }
    }

    /// CSS-style transform: `translate(Xpx, Ypx) scale(S)`.
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Vertical drag-to-zoom input source.
///
/// Runs alongside the pan handler and feeds the same `ZoomState`, so a single
/// drag on a zoomed image both pans and zooms.
#[derive(Clone, Debug, Default)]
pub struct DragZoom {
    last_y: Option<f32>,
}

impl DragZoom {
    pub fn press(&mut self, y: f32) {
        self.last_y = Some(y);
    }

    /// Apply movement to `y`. Only acts while the primary button is held.
    /// Dragging upward zooms in.
    pub fn move_to(&mut self, y: f32, primary_down: bool, state: &mut ZoomState) {
        if !primary_down || !y.is_finite() {
            return;
        }
        let last = self.last_y.unwrap_or(y);
        let delta = (last - y) / DRAG_ZOOM_DIVISOR;
        if delta != 0.0 {
            state.zoom(delta);
        }
        self.last_y = Some(y);
    }

    pub fn release(&mut self) {
        self.last_y = None;
    }
}
