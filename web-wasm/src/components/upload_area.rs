//! アップロードエリアコンポーネント

use leptos::html;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

use crate::components::analyzing_overlay::AnalyzingOverlay;
use faceshape_common::UploadPanel;

#[component]
pub fn UploadArea<F, D>(
    upload: Signal<UploadPanel>,
    error: Signal<Option<String>>,
    on_file_selected: F,
    on_dismiss_error: D,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send + Sync,
    D: Fn() + 'static + Clone + Send + Sync,
{
    let input_ref = NodeRef::<html::Input>::new();

    // 隠しinputのファイル選択ダイアログを開く
    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div class="card upload-card">
            <h2>"📤 Upload Your Photo"</h2>

            {move || match upload.get() {
                UploadPanel::Empty => view! {
                    <div class="upload-area" on:click=open_picker>
                        <div class="upload-icon">"📷"</div>
                        <p>"Click to upload your photo"</p>
                        <p class="text-muted">"PNG, JPG up to 10MB"</p>
                    </div>
                }
                .into_any(),
                UploadPanel::Image { display_uri, analyzing } => view! {
                    <div class="preview">
                        <img src=display_uri alt="Uploaded" class="preview-image" />
                        <Show when=move || analyzing>
                            <AnalyzingOverlay />
                        </Show>
                    </div>
                    <button class="btn btn-secondary" on:click=open_picker>
                        "Choose Different Photo"
                    </button>
                }
                .into_any(),
            }}

            <input
                node_ref=input_ref
                type="file"
                accept="image/*"
                class="hidden"
                on:change=on_change
            />

            <Show when=move || error.with(|e| e.is_some())>
                <p class="upload-error">
                    {move || error.get().unwrap_or_default()}
                    <button class="btn-dismiss" on:click={
                        let on_dismiss_error = on_dismiss_error.clone();
                        move |_| on_dismiss_error()
                    }>"✕"</button>
                </p>
            </Show>

            <div class="tips-box">
                <p class="tips-title">"For best results:"</p>
                <ul>
                    <li>"Use a clear, front-facing photo"</li>
                    <li>"Ensure good lighting"</li>
                    <li>"Keep hair away from face"</li>
                    <li>"Look directly at the camera"</li>
                </ul>
            </div>
        </div>
    }
}
