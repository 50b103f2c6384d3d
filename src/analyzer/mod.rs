//! 非同期の疑似解析
//!
//! 分類器の待ち時間だけ眠ってから分類結果を返す。
//! 画像の中身は見ない（`SimulatedClassifier` を参照）。

use faceshape_common::{ClassificationResult, Classifier, UploadedImage};

pub async fn analyze<C>(classifier: &C, image: &UploadedImage) -> ClassificationResult
where
    C: Classifier + ?Sized,
{
    tokio::time::sleep(classifier.latency()).await;
    classifier.classify(image)
}
