//! ヘッダーコンポーネント（タブ切替と外部リンク）

use faceshape_common::ActiveView;
use leptos::prelude::*;

#[component]
pub fn Header<F>(active_view: Signal<ActiveView>, on_select: F) -> impl IntoView
where
    F: Fn(ActiveView) + 'static + Clone + Send + Sync,
{
    let tab = move |target: ActiveView, label: &'static str| {
        let on_select = on_select.clone();
        view! {
            <button
                class="nav-tab"
                class:active=move || active_view.get() == target
                on:click=move |_| on_select(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="nav">
            <div class="nav-brand">
                <span class="nav-logo">"📷"</span>
                <span class="nav-title">"FaceShape AI"</span>
            </div>

            <div class="nav-tabs">
                {tab(ActiveView::Detector, "Detector")}
                {tab(ActiveView::Guide, "Face Shapes Guide")}
            </div>

            <div class="nav-links">
                <a
                    href="https://sites.google.com/view/face-shape-detector-/home"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Face Shape Detector ↗"
                </a>
                <a href="https://whatismyfaceshape.net/" target="_blank" rel="noopener noreferrer">
                    "Free Face Shape Detector ↗"
                </a>
                <a href="https://github.com/gulzar-abbas" target="_blank" rel="noopener noreferrer">
                    "GitHub"
                </a>
            </div>
        </nav>
    }
}
