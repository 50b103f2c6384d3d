//! 端末向けの画面描画

use faceshape_common::data_url;
use faceshape_common::{DetectorView, GuideCard, ResultPanel, UploadPanel, View};
use std::fmt::Write as _;

pub fn render_view(view: &View) -> String {
    match view {
        View::Detector(detector) => render_detector(detector),
        View::Guide(cards) => render_guide(cards),
    }
}

pub fn render_detector(view: &DetectorView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📷 Upload Your Photo");
    match &view.upload {
        UploadPanel::Empty => {
            let _ = writeln!(out, "  写真が選択されていません（PNG, JPG）");
        }
        UploadPanel::Image {
            display_uri,
            analyzing,
        } => {
            let _ = writeln!(out, "  🖼  {}", describe_image(display_uri));
            if *analyzing {
                let _ = writeln!(out, "  ⏳ Analyzing your face shape...");
            }
        }
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "  ⚠ {}", error);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "👤 Your Results");
    match &view.result {
        ResultPanel::Placeholder => {
            let _ = writeln!(out, "  Upload a photo to see your results");
        }
        ResultPanel::Complete(result) => {
            let _ = writeln!(out, "  ✔ Analysis Complete");
            let _ = writeln!(out, "  {} Face Shape", result.shape);
            let _ = writeln!(out, "  Confidence: {}%", result.confidence);
            let _ = writeln!(out);
            let _ = writeln!(out, "  Description");
            let _ = writeln!(out, "    {}", result.description);
            let _ = writeln!(out);
            let _ = writeln!(out, "  Styling Tips");
            for tip in &result.tips {
                let _ = writeln!(out, "    ✔ {}", tip);
            }
        }
    }

    out
}

pub fn render_guide(cards: &[GuideCard]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Face Shapes Guide");

    for card in cards {
        let _ = writeln!(out);
        let _ = writeln!(out, "■ {}", card.name);
        let _ = writeln!(out, "  {}", card.description);
        let _ = writeln!(out, "  Key Tips:");
        for tip in card.key_tips {
            let _ = writeln!(out, "    ✔ {}", tip);
        }
    }

    out
}

/// Data URLの中身は表示できないので形式とサイズだけ出す
fn describe_image(display_uri: &str) -> String {
    let mime = data_url::data_url_mime_type(display_uri).unwrap_or("unknown");
    match data_url::decode_data_url(display_uri) {
        Ok(bytes) => format!("{} ({:.1} KB)", mime, bytes.len() as f64 / 1024.0),
        Err(_) => mime.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceshape_common::view::{detector_view, guide_cards};
    use faceshape_common::{ClassificationResult, SessionState, ShapeId, UploadedImage};

    #[test]
    fn test_render_empty_detector() {
        let state = SessionState::new();
        let text = render_detector(&detector_view(&state));
        assert!(text.contains("Upload Your Photo"));
        assert!(text.contains("Upload a photo to see your results"));
        assert!(!text.contains("Analyzing"));
    }

    #[test]
    fn test_render_analyzing() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        state.finish_intake(intake, UploadedImage::from_bytes("image/png", &[0u8; 2048]));

        let text = render_detector(&detector_view(&state));
        assert!(text.contains("image/png (2.0 KB)"));
        assert!(text.contains("Analyzing your face shape..."));
    }

    #[test]
    fn test_render_result() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        let ticket = state
            .finish_intake(intake, UploadedImage::from_bytes("image/jpeg", b"x"))
            .unwrap();
        state.complete_analysis(
            ticket,
            ClassificationResult::from_category(ShapeId::Diamond.category(), 87),
        );

        let text = render_detector(&detector_view(&state));
        assert!(text.contains("Diamond Face Shape"));
        assert!(text.contains("Confidence: 87%"));
        assert!(text.contains("Chin-length bobs are flattering"));
        assert!(!text.contains("Analyzing"));
    }

    #[test]
    fn test_render_error() {
        let mut state = SessionState::new();
        let intake = state.begin_intake();
        state.fail_intake(intake, "画像を読み込めません");

        let text = render_detector(&detector_view(&state));
        assert!(text.contains("⚠ 画像を読み込めません"));
    }

    #[test]
    fn test_render_guide_shows_two_tips_per_card() {
        let text = render_guide(&guide_cards());
        assert_eq!(text.matches("■ ").count(), 6);
        assert_eq!(text.matches("✔ ").count(), 12);
        assert!(text.contains("Suits almost any hairstyle"));
        assert!(!text.contains("Can experiment with various makeup looks"));
    }
}
