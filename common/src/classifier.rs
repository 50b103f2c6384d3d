//! 顔型分類器
//!
//! `SimulatedClassifier` は画像の内容を一切見ない。6種類の顔型から
//! 一様に1つを選び、80〜99の疑似信頼度を付けて返すだけの仮実装である。
//! 実際の推論モデルに差し替える場合は `Classifier` を実装すればよく、
//! セッション状態や表示側には手を入れなくてよい。

use crate::catalog::ShapeId;
use crate::types::{ClassificationResult, UploadedImage};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// 解析待ち時間の既定値（ミリ秒）
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

/// 信頼度の下限（含む）
pub const CONFIDENCE_MIN: u8 = 80;

/// 信頼度の上限（含む）
pub const CONFIDENCE_MAX: u8 = 99;

/// 分類器インターフェース
pub trait Classifier {
    /// 画像を分類する
    fn classify(&self, image: &UploadedImage) -> ClassificationResult;

    /// 結果を返すまでの待ち時間
    fn latency(&self) -> Duration {
        Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS)
    }
}

/// 乱数による疑似分類器
pub struct SimulatedClassifier {
    rng: Mutex<StdRng>,
    latency: Duration,
}

impl SimulatedClassifier {
    /// OSの乱数源でシードする
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// 固定シード（再現用）
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            latency: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// カテゴリと信頼度を抽選
    pub fn draw(&self) -> (ShapeId, u8) {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = *ShapeId::ALL.choose(&mut *rng).unwrap_or(&ShapeId::Oval);
        let confidence = rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX);
        (id, confidence)
    }
}

impl Default for SimulatedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for SimulatedClassifier {
    fn classify(&self, _image: &UploadedImage) -> ClassificationResult {
        let (id, confidence) = self.draw();
        tracing::debug!(shape = id.key(), confidence, "simulated classification");
        ClassificationResult::from_category(id.category(), confidence)
    }

    fn latency(&self) -> Duration {
        self.latency
    }
}
