//! セッション状態
//!
//! 画像取り込み・解析完了・タブ切替のハンドラだけが状態を更新する。
//! 取り込みと解析にはそれぞれ単調増加の番号を振り、古い番号の
//! 完了通知は無視する（後から届いた古い結果で新しい画像の表示を
//! 上書きしないため）。

use crate::types::{ClassificationResult, UploadedImage};
use serde::{Deserialize, Serialize};

/// 表示中のタブ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveView {
    #[default]
    Detector,
    Guide,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Detector => "detector",
            ActiveView::Guide => "guide",
        }
    }
}

/// ファイル読み込み1回分の受付番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntakeTicket(u64);

impl IntakeTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// 解析1回分の世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisTicket(u64);

impl AnalysisTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// セッション状態（1画面に1つ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_image: Option<UploadedImage>,
    pub current_result: Option<ClassificationResult>,
    pub is_analyzing: bool,
    pub active_view: ActiveView,
    /// 直近の取り込み失敗メッセージ
    pub intake_error: Option<String>,
    latest_intake: u64,
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル選択を受け付け、読み込み用の番号を発行
    pub fn begin_intake(&mut self) -> IntakeTicket {
        self.latest_intake += 1;
        IntakeTicket(self.latest_intake)
    }

    /// 読み込み完了。最新の受付であれば画像を差し替えて解析番号を返す。
    pub fn finish_intake(
        &mut self,
        ticket: IntakeTicket,
        image: UploadedImage,
    ) -> Option<AnalysisTicket> {
        if ticket.0 != self.latest_intake {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_intake,
                "discarding superseded intake"
            );
            return None;
        }

        self.generation += 1;
        self.current_image = Some(image);
        self.current_result = None;
        self.intake_error = None;
        self.is_analyzing = true;
        Some(AnalysisTicket(self.generation))
    }

    /// 読み込み失敗。表示中の画像・結果・解析中フラグはそのまま残す。
    pub fn fail_intake(&mut self, ticket: IntakeTicket, message: impl Into<String>) -> bool {
        if ticket.0 != self.latest_intake {
            return false;
        }
        let message = message.into();
        tracing::warn!(error = %message, "image intake failed");
        self.intake_error = Some(message);
        true
    }

    /// 解析完了。現在の画像に対する解析でなければ破棄してfalseを返す。
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        result: ClassificationResult,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                generation = ticket.0,
                current = self.generation,
                "discarding stale analysis result"
            );
            return false;
        }

        self.current_result = Some(result);
        self.is_analyzing = false;
        true
    }

    pub fn is_current(&self, ticket: AnalysisTicket) -> bool {
        ticket.0 == self.generation
    }

    /// タブ切替（画像・結果には触れない）
    pub fn set_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn dismiss_error(&mut self) {
        self.intake_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeId;

    fn image(tag: &str) -> UploadedImage {
        UploadedImage::from_bytes("image/jpeg", tag.as_bytes())
    }

    fn result(id: ShapeId, confidence: u8) -> ClassificationResult {
        ClassificationResult::from_category(id.category(), confidence)
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert!(state.current_image.is_none());
        assert!(state.current_result.is_none());
        assert!(!state.is_analyzing);
        assert_eq!(state.active_view, ActiveView::Detector);
    }

    #[test]
    fn test_intake_then_analysis() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state.finish_intake(intake, image("a")).expect("受付されること");

        assert!(state.is_analyzing);
        assert_eq!(state.current_image, Some(image("a")));
        assert!(state.current_result.is_none());

        assert!(state.complete_analysis(ticket, result(ShapeId::Round, 85)));
        assert!(!state.is_analyzing);
        assert_eq!(state.current_result.as_ref().map(|r| r.shape.as_str()), Some("Round"));
    }

    #[test]
    fn test_new_image_clears_previous_result() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state.finish_intake(intake, image("a")).unwrap();
        state.complete_analysis(ticket, result(ShapeId::Oval, 90));

        let intake = state.begin_intake();
        state.finish_intake(intake, image("b")).unwrap();
        assert!(state.current_result.is_none());
        assert!(state.is_analyzing);
    }

    #[test]
    fn test_stale_analysis_is_discarded() {
        let mut state = SessionState::new();

        let intake_a = state.begin_intake();
        let ticket_a = state.finish_intake(intake_a, image("a")).unwrap();
        let intake_b = state.begin_intake();
        let ticket_b = state.finish_intake(intake_b, image("b")).unwrap();

        // Bの結果が先に届き、その後Aの結果が届く
        assert!(state.complete_analysis(ticket_b, result(ShapeId::Square, 93)));
        assert!(!state.complete_analysis(ticket_a, result(ShapeId::Heart, 81)));

        assert_eq!(state.current_image, Some(image("b")));
        assert_eq!(state.current_result, Some(result(ShapeId::Square, 93)));
        assert!(!state.is_analyzing);
    }

    #[test]
    fn test_stale_analysis_does_not_end_newer_analysis() {
        let mut state = SessionState::new();

        let intake_a = state.begin_intake();
        let ticket_a = state.finish_intake(intake_a, image("a")).unwrap();
        let intake_b = state.begin_intake();
        let ticket_b = state.finish_intake(intake_b, image("b")).unwrap();

        assert!(!state.complete_analysis(ticket_a, result(ShapeId::Heart, 81)));
        assert!(state.is_analyzing);
        assert!(state.current_result.is_none());

        assert!(state.complete_analysis(ticket_b, result(ShapeId::Diamond, 97)));
        assert_eq!(state.current_result, Some(result(ShapeId::Diamond, 97)));
    }

    #[test]
    fn test_superseded_intake_is_ignored() {
        let mut state = SessionState::new();
        let slow = state.begin_intake();
        let fast = state.begin_intake();

        assert!(state.finish_intake(fast, image("fast")).is_some());
        assert!(state.finish_intake(slow, image("slow")).is_none());
        assert_eq!(state.current_image, Some(image("fast")));
    }

    #[test]
    fn test_failed_intake_keeps_prior_state() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state.finish_intake(intake, image("a")).unwrap();
        state.complete_analysis(ticket, result(ShapeId::Oblong, 88));
        let before_image = state.current_image.clone();
        let before_result = state.current_result.clone();

        let broken = state.begin_intake();
        assert!(state.fail_intake(broken, "読み込みに失敗しました"));

        assert_eq!(state.current_image, before_image);
        assert_eq!(state.current_result, before_result);
        assert!(!state.is_analyzing);
        assert_eq!(state.intake_error.as_deref(), Some("読み込みに失敗しました"));
    }

    #[test]
    fn test_failed_intake_on_empty_session() {
        let mut state = SessionState::new();
        let broken = state.begin_intake();
        state.fail_intake(broken, "error");

        assert!(state.current_image.is_none());
        assert!(!state.is_analyzing);
    }

    #[test]
    fn test_failed_intake_keeps_pending_analysis() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state.finish_intake(intake, image("a")).unwrap();

        let broken = state.begin_intake();
        state.fail_intake(broken, "error");
        assert!(state.is_analyzing);

        // Aの解析はまだ有効
        assert!(state.complete_analysis(ticket, result(ShapeId::Round, 80)));
    }

    #[test]
    fn test_successful_intake_clears_error() {
        let mut state = SessionState::new();
        let broken = state.begin_intake();
        state.fail_intake(broken, "error");

        let intake = state.begin_intake();
        state.finish_intake(intake, image("a"));
        assert!(state.intake_error.is_none());
    }

    #[test]
    fn test_dismiss_error_only_clears_message() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state.finish_intake(intake, image("a")).unwrap();
        let broken = state.begin_intake();
        state.fail_intake(broken, "error");

        state.dismiss_error();
        assert!(state.intake_error.is_none());
        assert!(state.is_analyzing);
        assert!(state.complete_analysis(ticket, result(ShapeId::Heart, 88)));
    }

    #[test]
    fn test_view_switch_preserves_image_and_result() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state.finish_intake(intake, image("a")).unwrap();
        state.complete_analysis(ticket, result(ShapeId::Heart, 95));
        let before = state.clone();

        state.set_view(ActiveView::Guide);
        assert_eq!(state.active_view, ActiveView::Guide);
        state.set_view(ActiveView::Detector);

        assert_eq!(state, before);
    }
}
