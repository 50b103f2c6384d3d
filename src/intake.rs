//! 画像取り込み
//!
//! ブラウザ版の `accept="image/*"` に相当する拡張子チェックだけを行い、
//! 中身の検証はしない。読み込んだバイト列はData URLに変換する。

use crate::error::{FaceShapeError, Result};
use faceshape_common::UploadedImage;
use image::ImageFormat;
use std::path::Path;

/// 画像として受け付けるファイルならMIMEタイプを返す
pub fn image_mime_type(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// ファイル選択のフィルタ
pub fn accept(path: &Path) -> Result<&'static str> {
    image_mime_type(path).ok_or_else(|| FaceShapeError::UnsupportedFileType(path.to_path_buf()))
}

/// 画像ファイルを読み込んでData URLにする
pub async fn read_image(path: &Path) -> Result<UploadedImage> {
    let mime_type = accept(path)?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| FaceShapeError::IntakeFailure {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "image read");
    Ok(UploadedImage::from_bytes(mime_type, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_accept_image_extensions() {
        assert_eq!(accept(Path::new("photo.jpg")).ok(), Some("image/jpeg"));
        assert_eq!(accept(Path::new("photo.JPEG")).ok(), Some("image/jpeg"));
        assert_eq!(accept(Path::new("photo.png")).ok(), Some("image/png"));
        assert_eq!(accept(Path::new("photo.webp")).ok(), Some("image/webp"));
        assert!(accept(Path::new("notes.txt")).is_err());
        assert!(accept(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_image_mime_type() {
        assert_eq!(image_mime_type(Path::new("a.jpg")), Some("image/jpeg"));
        assert_eq!(image_mime_type(Path::new("a.png")), Some("image/png"));
    }

    #[test]
    fn test_accept_rejects_non_image() {
        let err = accept(Path::new("report.pdf")).unwrap_err();
        match err {
            FaceShapeError::UnsupportedFileType(path) => {
                assert_eq!(path, PathBuf::from("report.pdf"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
