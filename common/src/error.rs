//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Unknown face shape: {0}")]
    UnknownShape(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_error_display_invalid_data_url() {
        let error = Error::InvalidDataUrl("missing comma".to_string());
        assert_eq!(format!("{}", error), "Invalid data URL: missing comma");
    }

    #[test]
    fn test_error_display_unknown_shape() {
        let error = Error::UnknownShape("triangle".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Unknown face shape"));
        assert!(display.contains("triangle"));
    }

    #[test]
    fn test_error_from_base64() {
        let decode_error = base64::engine::general_purpose::STANDARD
            .decode("@@@")
            .unwrap_err();
        let error: Error = decode_error.into();
        assert!(matches!(error, Error::Base64(_)));
        assert!(format!("{}", error).contains("Base64"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownShape("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownShape"));
        assert!(debug.contains("テスト"));
    }
}
