// =============================================================================
// CornerInch Web - Home Page (Launch Countdown)
// =============================================================================
// Table of Contents:
// 1. Feature Copy
// 2. Launch Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CountdownTimer, EmailSignup, FeatureCard, Footer, SignupVariant};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Feature Copy
// -----------------------------------------------------------------------------

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "pen-tool",
        title: "Design Excellence",
        body: "Every item is carefully selected by design professionals for its craftsmanship and style.",
    },
    Feature {
        icon: "shield-check",
        title: "Quality You Can Trust",
        body: "Only the highest standards of materials and construction make the cut.",
    },
    Feature {
        icon: "award",
        title: "Verified Premium Brands",
        body: "Shop with confidence: every creator and brand is vetted for authenticity.",
    },
];

// -----------------------------------------------------------------------------
// 2. Launch Page
// -----------------------------------------------------------------------------

/// Public coming-soon page.
#[component]
pub fn LaunchPage() -> impl IntoView {
    let config = expect_context::<AppState>().config;

    view! {
        <div class="page page-home">
            // ═══════════════════════════════════════════════════════════════
            // HERO
            // ═══════════════════════════════════════════════════════════════
            <section class="hero">
                <div class="hero-bg"></div>

                <div class="hero-main">
                    <div class="hero-brand">
                        <h2 class="brand-name">"CornerInch"</h2>
                        <div class="brand-rule"></div>
                    </div>

                    <div class="launch-badge">
                        <span class="launch-badge-label">"Launching In"</span>
                    </div>

                    <CountdownTimer target=config.launch tick_ms=config.tick_ms />

                    <h1 class="hero-headline">
                        "A Curated Marketplace where Design meets Lifestyle."
                    </h1>

                    <p class="hero-description">
                        "Discover timeless furniture and home décor from exceptional designers."
                    </p>

                    <EmailSignup variant=SignupVariant::Hero />
                </div>
            </section>

            // ═══════════════════════════════════════════════════════════════
            // ABOUT
            // ═══════════════════════════════════════════════════════════════
            <section class="about-section">
                <div class="section-header">
                    <h2 class="section-title">"Thoughtfully Curated for You"</h2>
                    <p class="section-desc">
                        "We bring together design lovers and creators of unique, sustainable home pieces. "
                        "Each item in our marketplace is carefully selected for its craftsmanship, "
                        "timeless appeal, and the story it brings to your space."
                    </p>
                </div>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|f| view! { <FeatureCard icon=f.icon title=f.title body=f.body /> })
                        .collect_view()}
                </div>
            </section>

            // ═══════════════════════════════════════════════════════════════
            // NEWSLETTER
            // ═══════════════════════════════════════════════════════════════
            <section class="newsletter-section">
                <div class="section-header">
                    <h2 class="section-title">"Join Our Early Community"</h2>
                    <p class="section-desc">
                        "Be the first to discover new arrivals, exclusive launches, and design inspiration."
                    </p>
                </div>

                <EmailSignup variant=SignupVariant::Newsletter />
            </section>

            <Footer />
        </div>
    }
}
