// =============================================================================
// CornerInch Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

use crate::components::Footer;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"We're still putting the finishing touches on CornerInch. This page isn't here yet."</p>
                <a href="/" class="btn btn-primary">
                    "Back to Home"
                </a>
            </div>
            <Footer />
        </div>
    }
}
