//! 診断結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - UploadedImage: 取り込んだ画像（表示用Data URL）
//! - ClassificationResult: 顔型診断の結果

use crate::catalog::ShapeCategory;
use crate::data_url;
use serde::{Deserialize, Serialize};

/// アップロード画像
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// ブラウザで描画できるData URL
    pub display_uri: String,
}

impl UploadedImage {
    pub fn new(display_uri: impl Into<String>) -> Self {
        Self {
            display_uri: display_uri.into(),
        }
    }

    /// バイト列からData URL形式で作成
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        Self::new(data_url::encode_data_url(mime_type, bytes))
    }
}

/// 顔型診断結果
///
/// `description` と `tips` は一致したカテゴリからそのままコピーする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub shape: String,
    pub confidence: u8,
    pub description: String,
    pub tips: Vec<String>,
}

impl ClassificationResult {
    pub fn from_category(category: &ShapeCategory, confidence: u8) -> Self {
        Self {
            shape: category.name.to_string(),
            confidence,
            description: category.description.to_string(),
            tips: category.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}
