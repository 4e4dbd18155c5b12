use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the analysis server. `message` is the
    /// server's `detail` field when present.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Question is empty")]
    EmptyQuestion,

    #[error("A request is already in flight")]
    Busy,

    #[error("No previous response to refer to")]
    MissingContext,
}

pub type Result<T> = std::result::Result<T, TutorError>;
