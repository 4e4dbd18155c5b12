/// Lower bound of the preview zoom scale (identity).
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Upper bound of the preview zoom scale.
pub const MAX_ZOOM_SCALE: f32 = 3.0;

/// Scale change per unit of zoom delta (one wheel tick).
pub const ZOOM_STEP: f32 = 0.1;

/// Delta used by double-click and the overlay icon. Saturates at
/// `MAX_ZOOM_SCALE` from identity.
pub const TOGGLE_ZOOM_DELTA: f32 = 20.0;

/// Pixels of vertical drag per unit of zoom delta.
pub const DRAG_ZOOM_DIVISOR: f32 = 100.0;

/// Hostnames that select the local development origin.
pub const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

/// Development server origin.
pub const LOCAL_ORIGIN: &str = "http://127.0.0.1:8000";

/// Deployed server origin.
pub const PRODUCTION_ORIGIN: &str = "https://gre-ai-cbdb67695e84.herokuapp.com";

pub const FOLLOW_UP_PATH: &str = "/follow-up";
pub const FEEDBACK_PATH: &str = "/feedback";
pub const SERVER_VERSION_PATH: &str = "/tesseract-version";

/// Acknowledgement shown after feedback is accepted.
pub const FEEDBACK_THANKS: &str = "Thank you for your feedback!";

/// Prefix of the assistant message shown when a request fails.
pub const ERROR_MESSAGE_PREFIX: &str = "An error occurred: ";
