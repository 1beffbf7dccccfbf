// =============================================================================
// CornerInch Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. Startup
// 4. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod countdown;
pub mod pages;
pub mod services;
pub mod signup;
pub mod state;
pub mod ticker;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use countdown::{CountdownTarget, RemainingTime};
pub use state::AppState;

// -----------------------------------------------------------------------------
// 3. Startup
// -----------------------------------------------------------------------------

use config::Environment;

/// Install the panic hook and console logger, then resolve the site config.
///
/// A bad build-time override is logged and the built-in defaults are used.
pub fn init() -> SiteConfig {
    console_error_panic_hook::set_once();

    // Ignore if already initialized by wasm_bindgen start
    let _ = console_log::init_with_level(Environment::current().log_level());

    match SiteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid site configuration, using defaults: {}", err);
            SiteConfig::default()
        }
    }
}

// -----------------------------------------------------------------------------
// 4. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    let config = init();
    log::info!("Mounting CornerInch Web app...");
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
