// =============================================================================
// CornerInch Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use cornerinch_web::App;
use leptos::prelude::*;

fn main() {
    // Panic hook, logger and build-time config
    let config = cornerinch_web::init();

    log::info!(
        "Starting CornerInch Web (launch at {}, {:?} delivery)",
        config.launch.at(),
        config.delivery
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
