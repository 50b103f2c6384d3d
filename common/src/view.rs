//! 表示モデル
//!
//! `SessionState` から画面構成を組み立てる純関数。
//! Leptosコンポーネントと端末表示はこのモデルをそのまま描画する。
//! 状態を借用しない値として返すので、Leptosのメモにもそのまま載せられる。

use crate::catalog::{self, ShapeCategory};
use crate::session::{ActiveView, SessionState};
use crate::types::ClassificationResult;

/// ガイドカードに載せるtips数
pub const GUIDE_TIP_COUNT: usize = 2;

/// 画面全体
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Detector(DetectorView),
    Guide(Vec<GuideCard>),
}

/// 診断タブ
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorView {
    pub upload: UploadPanel,
    pub result: ResultPanel,
    pub error: Option<String>,
}

/// アップロード欄
#[derive(Debug, Clone, PartialEq)]
pub enum UploadPanel {
    /// 画像未選択（アップロードボタン）
    Empty,
    /// 画像表示。解析中はオーバーレイを重ねる
    Image { display_uri: String, analyzing: bool },
}

/// 結果欄
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Placeholder,
    Complete(ClassificationResult),
}

/// ガイドタブのカード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideCard {
    pub name: &'static str,
    pub description: &'static str,
    pub key_tips: &'static [&'static str],
}

impl GuideCard {
    pub fn from_category(category: &'static ShapeCategory) -> Self {
        let shown = category.tips.len().min(GUIDE_TIP_COUNT);
        Self {
            name: category.name,
            description: category.description,
            key_tips: &category.tips[..shown],
        }
    }
}

/// 状態から画面を組み立てる
pub fn render(state: &SessionState) -> View {
    match state.active_view {
        ActiveView::Detector => View::Detector(detector_view(state)),
        ActiveView::Guide => View::Guide(guide_cards()),
    }
}

pub fn detector_view(state: &SessionState) -> DetectorView {
    let upload = match &state.current_image {
        None => UploadPanel::Empty,
        Some(image) => UploadPanel::Image {
            display_uri: image.display_uri.clone(),
            analyzing: state.is_analyzing,
        },
    };
    let result = match &state.current_result {
        Some(result) => ResultPanel::Complete(result.clone()),
        None => ResultPanel::Placeholder,
    };

    DetectorView {
        upload,
        result,
        error: state.intake_error.clone(),
    }
}

pub fn guide_cards() -> Vec<GuideCard> {
    catalog::all().iter().map(GuideCard::from_category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeId;
    use crate::types::UploadedImage;

    fn analyzed_state() -> SessionState {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state
            .finish_intake(intake, UploadedImage::new("data:image/png;base64,AAAA"))
            .unwrap();
        state.complete_analysis(
            ticket,
            ClassificationResult::from_category(ShapeId::Square.category(), 90),
        );
        state
    }

    #[test]
    fn test_guide_has_six_cards_with_two_tips() {
        let cards = guide_cards();
        assert_eq!(cards.len(), 6);
        for (card, category) in cards.iter().zip(catalog::all()) {
            assert_eq!(card.name, category.name);
            assert_eq!(card.description, category.description);
            assert_eq!(card.key_tips.len(), GUIDE_TIP_COUNT);
            assert_eq!(card.key_tips, &category.tips[..2]);
        }
    }

    #[test]
    fn test_guide_card_with_short_tip_list() {
        static SHORT: ShapeCategory = ShapeCategory {
            id: ShapeId::Oval,
            name: "Oval",
            description: "short",
            tips: &["only one"],
        };
        let card = GuideCard::from_category(&SHORT);
        assert_eq!(card.key_tips, &["only one"]);
    }

    #[test]
    fn test_empty_detector_view() {
        let state = SessionState::new();
        match render(&state) {
            View::Detector(view) => {
                assert_eq!(view.upload, UploadPanel::Empty);
                assert_eq!(view.result, ResultPanel::Placeholder);
                assert!(view.error.is_none());
            }
            other => panic!("診断タブのはず: {:?}", other),
        }
    }

    #[test]
    fn test_analyzing_detector_view() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        state.finish_intake(intake, UploadedImage::new("data:image/png;base64,AAAA"));

        let view = detector_view(&state);
        assert_eq!(
            view.upload,
            UploadPanel::Image {
                display_uri: "data:image/png;base64,AAAA".to_string(),
                analyzing: true
            }
        );
        assert_eq!(view.result, ResultPanel::Placeholder);
    }

    #[test]
    fn test_complete_detector_view() {
        let state = analyzed_state();
        let view = detector_view(&state);

        assert!(matches!(view.upload, UploadPanel::Image { analyzing: false, .. }));
        match view.result {
            ResultPanel::Complete(result) => {
                assert_eq!(result.shape, "Square");
                assert_eq!(result.tips.len(), 4);
            }
            ResultPanel::Placeholder => panic!("結果が表示されるはず"),
        }
    }

    #[test]
    fn test_render_guide() {
        let mut state = analyzed_state();
        state.set_view(ActiveView::Guide);
        assert!(matches!(render(&state), View::Guide(cards) if cards.len() == 6));
    }

    #[test]
    fn test_error_is_rendered() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        state.fail_intake(intake, "cannot read");
        assert_eq!(detector_view(&state).error.as_deref(), Some("cannot read"));
    }
}
