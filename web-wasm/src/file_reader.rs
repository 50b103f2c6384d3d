//! FileReaderによる画像読み込み
//!
//! 読み込み中のリーダーは呼び出し側が保持する。手放すと読み込みは中断され、
//! コールバックも解放される。

use gloo::file::callbacks::{self, FileReader};
use gloo::file::File;

/// 読み込み失敗時にユーザーへ表示するメッセージ
pub const READ_ERROR_MESSAGE: &str = "We couldn't read that file. Please choose another photo.";

/// ファイルをData URLとして読み込み、完了時に `on_done` を呼ぶ
pub fn read_as_data_url<F>(file: File, on_done: F) -> FileReader
where
    F: FnOnce(Result<String, String>) + 'static,
{
    let file_name = file.name();
    callbacks::read_as_data_url(&file, move |outcome| {
        on_done(outcome.map_err(|err| {
            web_sys::console::warn_1(&format!("failed to read {}: {}", file_name, err).into());
            READ_ERROR_MESSAGE.to_string()
        }))
    })
}
