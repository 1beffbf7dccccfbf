// =============================================================================
// CornerInch Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App State
// =============================================================================

use crate::config::SiteConfig;
use crate::services::toasts::Toasts;
use crate::signup::SignupForm;

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Build-time site configuration.
    pub config: SiteConfig,

    /// Shared by the hero and newsletter forms.
    pub signup: SignupForm,

    /// Notification channel.
    pub toasts: Toasts,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new(config: SiteConfig) -> Self {
        let signup = SignupForm::new(config.delivery);
        let toasts = Toasts::new(config.toast_limit, config.toast_lifetime_ms);

        Self {
            config,
            signup,
            toasts,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
