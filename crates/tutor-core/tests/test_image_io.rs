#[allow(dead_code)]
mod common;

use tutor_core::image_io::{load_image, ImageAttachment};

#[test]
fn test_load_png_attachment() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "question.png", 6, 4);

    let attachment = ImageAttachment::load(&path).unwrap();
    assert_eq!(attachment.file_name, "question.png");
    assert_eq!(attachment.mime, "image/png");
    assert_eq!(attachment.bytes, std::fs::read(&path).unwrap());
}

#[test]
fn test_decode_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "question.png", 6, 4);

    let (_, preview) = load_image(&path).unwrap();
    assert_eq!(preview.width, 6);
    assert_eq!(preview.height, 4);
    assert_eq!(preview.rgba.len(), 6 * 4 * 4);
    assert_eq!(&preview.rgba[..4], &[200, 40, 40, 255]);
}

#[test]
fn test_data_url() {
    let attachment = ImageAttachment {
        file_name: "x.png".into(),
        mime: "image/png".into(),
        bytes: b"abc".to_vec(),
    };
    assert_eq!(attachment.to_data_url(), "data:image/png;base64,YWJj");
}

#[test]
fn test_mime_sniffed_from_content() {
    let dir = tempfile::tempdir().unwrap();
    let png = common::write_png(dir.path(), "question.png", 2, 2);
    let misnamed = dir.path().join("question.jpg");
    std::fs::copy(&png, &misnamed).unwrap();

    assert_eq!(ImageAttachment::load(&misnamed).unwrap().mime, "image/png");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ImageAttachment::load(&dir.path().join("nope.png")).is_err());
}

#[test]
fn test_non_image_fails_to_decode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not an image").unwrap();

    let attachment = ImageAttachment::load(&path).unwrap();
    assert_eq!(attachment.mime, "application/octet-stream");
    assert!(attachment.decode_preview().is_err());
}
