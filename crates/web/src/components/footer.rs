// =============================================================================
// CornerInch Web - Footer Component
// =============================================================================

use leptos::prelude::*;

pub const CONTACT_EMAIL: &str = "hello@CornerInch.com";

/// Site footer: brand, tagline, contact and copyright.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-main">
                <div class="footer-brand-col">
                    <h3 class="footer-brand">"CornerInch"</h3>
                    <p class="footer-tagline">"Curated furniture & home décor marketplace"</p>
                </div>

                <div class="footer-meta-col">
                    <a href=format!("mailto:{}", CONTACT_EMAIL) class="footer-link">{CONTACT_EMAIL}</a>
                    <p class="footer-copyright">"© 2025 CornerInch. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
