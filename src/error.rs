use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaceShapeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("画像ファイルではありません: {0}")]
    UnsupportedFileType(PathBuf),

    #[error("画像を読み込めません: {path}: {source}")]
    IntakeFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] faceshape_common::Error),
}

pub type Result<T> = std::result::Result<T, FaceShapeError>;
