//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h3>"📷 FaceShape AI"</h3>
                    <p class="text-muted">
                        "Face shape readings and styling recommendations. Results are simulated and do not analyze your photo."
                    </p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <a
                        href="https://sites.google.com/view/face-shape-detector-/home"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Face Shape Detector"
                    </a>
                    <a href="https://whatismyfaceshape.net/" target="_blank" rel="noopener noreferrer">
                        "Free Face Shape Detector"
                    </a>
                </div>
                <div>
                    <h3>"Developer"</h3>
                    <a href="https://github.com/gulzar-abbas" target="_blank" rel="noopener noreferrer">
                        "gulzar-abbas"
                    </a>
                </div>
            </div>
            <p class="footer-copy">"© 2025 FaceShape AI. All rights reserved."</p>
        </footer>
    }
}
