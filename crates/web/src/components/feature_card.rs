// =============================================================================
// CornerInch Web - Feature Card
// =============================================================================

use leptos::prelude::*;

/// One feature highlight: icon, title and a short blurb.
#[component]
pub fn FeatureCard(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] body: String,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">
                <span class=format!("icon icon-{}", icon) aria-hidden="true"></span>
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-body">{body}</p>
        </div>
    }
}
