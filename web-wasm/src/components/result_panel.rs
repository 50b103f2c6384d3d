//! 診断結果コンポーネント

use leptos::prelude::*;

use faceshape_common::view::ResultPanel as ResultState;

#[component]
pub fn ResultPanel(result: Signal<ResultState>) -> impl IntoView {
    view! {
        <div class="card result-card">
            <h2>"👤 Your Results"</h2>

            {move || match result.get() {
                ResultState::Placeholder => view! {
                    <div class="result-empty">
                        <div class="result-empty-icon">"⚠"</div>
                        <p>"Upload a photo to see your results"</p>
                    </div>
                }
                .into_any(),
                ResultState::Complete(outcome) => view! {
                    <div class="result">
                        <span class="badge badge-success">"✔ Analysis Complete"</span>
                        <h3 class="result-shape">{format!("{} Face Shape", outcome.shape)}</h3>
                        <p class="result-confidence">
                            "Confidence: "
                            <strong>{format!("{}%", outcome.confidence)}</strong>
                        </p>

                        <div class="result-description">
                            <h4>"Description"</h4>
                            <p>{outcome.description.clone()}</p>
                        </div>

                        <div class="result-tips">
                            <h4>"Styling Tips"</h4>
                            <ul>
                                {outcome
                                    .tips
                                    .iter()
                                    .map(|tip| view! { <li>"✔ "{tip.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
