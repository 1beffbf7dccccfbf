// =============================================================================
// CornerInch Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Toaster;
use crate::config::SiteConfig;
use crate::pages::{LaunchPage, NotFoundPage};
use crate::state::AppState;

const PAGE_TITLE: &str = "CornerInch | Launching Soon";
const PAGE_DESCRIPTION: &str =
    "CornerInch is a curated marketplace for timeless furniture and home décor. Join the waitlist.";

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new(config));

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------
    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LaunchPage />
            </Routes>
        </Router>

        <Toaster />
    }
}
