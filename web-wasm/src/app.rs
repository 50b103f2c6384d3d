//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::analyzer;
use crate::components::{
    footer::Footer,
    header::Header,
    result_panel::ResultPanel,
    shape_guide::ShapeGuide,
    upload_area::UploadArea,
};
use crate::file_reader;
use gloo::file::callbacks::FileReader;
use faceshape_common::{
    view, ActiveView, AnalysisTicket, SessionState, SimulatedClassifier, UploadedImage,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // セッション状態（ハンドラだけが更新する）
    let state = RwSignal::new(SessionState::new());
    let classifier = StoredValue::new(Arc::new(SimulatedClassifier::new()));
    // 読み込み中のリーダー（次の選択で差し替えると前の読み込みは中断される）
    let pending_read = StoredValue::new_local(None::<FileReader>);

    let active_view = Signal::derive(move || state.with(|s| s.active_view));
    let detector = Memo::new(move |_| state.with(view::detector_view));

    // 解析開始（完了時に世代番号を照合してから反映）
    let start_analysis = move |ticket: AnalysisTicket, image: UploadedImage| {
        let classifier = classifier.get_value();
        spawn_local(async move {
            let result = analyzer::analyze(classifier.as_ref(), &image).await;
            state.update(|s| {
                s.complete_analysis(ticket, result);
            });
        });
    };

    // ファイル選択ハンドラ
    let on_file_selected = move |file: File| {
        let Some(intake) = state.try_update(|s| s.begin_intake()) else {
            return;
        };

        let reader = file_reader::read_as_data_url(gloo::file::File::from(file), move |outcome| match outcome {
            Ok(data_url) => {
                let image = UploadedImage::new(data_url);
                let accepted = state
                    .try_update(|s| s.finish_intake(intake, image.clone()))
                    .flatten();
                if let Some(ticket) = accepted {
                    start_analysis(ticket, image);
                }
            }
            Err(message) => {
                state.update(|s| {
                    s.fail_intake(intake, message);
                });
            }
        });
        pending_read.set_value(Some(reader));
    };

    let on_dismiss_error = move || {
        state.update(|s| s.dismiss_error());
    };

    let on_select_view = move |target: ActiveView| {
        state.update(|s| s.set_view(target));
    };

    view! {
        <div class="app">
            <Header active_view=active_view on_select=on_select_view />

            <main class="main">
                <Show
                    when=move || active_view.get() == ActiveView::Detector
                    fallback=|| view! { <ShapeGuide /> }
                >
                    <section class="hero">
                        <h1>"Discover Your Face Shape"</h1>
                        <p>
                            "Upload your photo and get an instant face shape reading with personalized styling recommendations."
                        </p>
                    </section>

                    <div class="detector-grid">
                        <UploadArea
                            upload=Signal::derive(move || detector.with(|d| d.upload.clone()))
                            error=Signal::derive(move || detector.with(|d| d.error.clone()))
                            on_file_selected=on_file_selected
                            on_dismiss_error=on_dismiss_error
                        />
                        <ResultPanel
                            result=Signal::derive(move || detector.with(|d| d.result.clone()))
                        />
                    </div>
                </Show>
            </main>

            <Footer />
        </div>
    }
}
