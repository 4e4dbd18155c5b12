use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;

use crate::error::Result;

/// A user-selected image, kept as raw file bytes for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Decoded RGBA pixels for on-screen preview.
#[derive(Clone, Debug)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageAttachment {
    /// Read an image file from disk. The MIME type comes from the content,
    /// falling back to the extension, then `application/octet-stream`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let mime = image::guess_format(&bytes)
            .ok()
            .or_else(|| ImageFormat::from_path(path).ok())
            .map(|f| f.to_mime_type().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        tracing::debug!(file = %file_name, %mime, size = bytes.len(), "Loaded image attachment");
        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    /// `data:<mime>;base64,<payload>` rendering of the file.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    pub fn decode_preview(&self) -> Result<PreviewImage> {
        let img = image::load_from_memory(&self.bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(PreviewImage {
            width,
            height,
            rgba: img.into_raw(),
        })
    }
}

/// Read and decode in one step, as the preview panel needs both.
pub fn load_image(path: &Path) -> Result<(ImageAttachment, PreviewImage)> {
    let attachment = ImageAttachment::load(path)?;
    let preview = attachment.decode_preview()?;
    Ok((attachment, preview))
}
