//! 顔型ガイドコンポーネント

use leptos::prelude::*;

use faceshape_common::view::{guide_cards, GuideCard};

#[component]
pub fn ShapeGuide() -> impl IntoView {
    view! {
        <section class="guide">
            <div class="hero">
                <h1>"Face Shapes Guide"</h1>
                <p>
                    "Learn about different face shapes and discover which styling approaches work best for each type."
                </p>
            </div>

            <div class="guide-grid">
                {guide_cards().into_iter().map(|card| view! { <ShapeCard card=card /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ShapeCard(card: GuideCard) -> impl IntoView {
    view! {
        <div class="card guide-card">
            <div class="guide-card-icon">"👤"</div>
            <h3>{card.name}</h3>
            <p class="text-muted">{card.description}</p>
            <h4>"Key Tips:"</h4>
            <ul>
                {card.key_tips.iter().map(|tip| view! { <li>"✔ "{*tip}</li> }).collect_view()}
            </ul>
        </div>
    }
}
