//! Data URL のエンコード・分解
//!
//! アップロード画像はブラウザでそのまま表示できる
//! `data:<mime>;base64,<payload>` 形式で保持する。

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// バイト列をData URLに変換
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
pub fn data_url_mime_type(data_url: &str) -> Option<&str> {
    let header = data_url.strip_prefix("data:")?.split(',').next()?;
    let mime = header.split(';').next()?;
    if mime.is_empty() {
        None
    } else {
        Some(mime)
    }
}

/// Data URLからBase64データ部分を抽出
pub fn data_url_payload(data_url: &str) -> Option<&str> {
    if !data_url.starts_with("data:") {
        return None;
    }
    data_url.split_once(',').map(|(_, payload)| payload)
}

/// Data URLをデコードして元のバイト列を得る
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = data_url_payload(data_url)
        .ok_or_else(|| Error::InvalidDataUrl(truncate(data_url)))?;
    Ok(STANDARD.decode(payload)?)
}

fn truncate(s: &str) -> String {
    s.chars().take(32).collect()
}
