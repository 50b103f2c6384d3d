//! ブラウザ上の疑似解析
//!
//! 分類器の待ち時間だけタイマーで待ってから分類する。

use faceshape_common::{ClassificationResult, Classifier, UploadedImage};
use gloo::timers::future::TimeoutFuture;

pub async fn analyze<C>(classifier: &C, image: &UploadedImage) -> ClassificationResult
where
    C: Classifier + ?Sized,
{
    let millis = u32::try_from(classifier.latency().as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;
    classifier.classify(image)
}
