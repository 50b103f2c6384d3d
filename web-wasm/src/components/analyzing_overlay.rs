//! 解析中オーバーレイ

use leptos::prelude::*;

#[component]
pub fn AnalyzingOverlay() -> impl IntoView {
    view! {
        <div class="analyzing-overlay">
            <div class="spinner" />
            <p class="analyzing-text">"Analyzing your face shape..."</p>
        </div>
    }
}
