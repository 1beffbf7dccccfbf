// =============================================================================
// CornerInch Web - Email Signup Form
// =============================================================================
// Table of Contents:
// 1. Variants
// 2. EmailSignup
// =============================================================================

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::FormCollector;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Variants
// -----------------------------------------------------------------------------

/// Where on the page the form sits. Only the copy and styling differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupVariant {
    #[default]
    Hero,
    Newsletter,
}

impl SignupVariant {
    pub fn idle_label(&self) -> &'static str {
        match self {
            SignupVariant::Hero => "Notify Me",
            SignupVariant::Newsletter => "Join Waitlist",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            SignupVariant::Hero => "Submitting...",
            SignupVariant::Newsletter => "Joining...",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            SignupVariant::Hero => "signup-form signup-hero",
            SignupVariant::Newsletter => "signup-form signup-newsletter",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. EmailSignup
// -----------------------------------------------------------------------------

/// Email capture form wired to the shared signup controller.
#[component]
pub fn EmailSignup(#[prop(optional)] variant: SignupVariant) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = app_state.signup;
    let toasts = app_state.toasts;
    let collector = FormCollector::from_config(&app_state.config);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let collector = collector.clone();
        spawn_local(async move {
            form.submit(&collector, &toasts).await;
        });
    };

    view! {
        <form class=variant.class() on:submit=on_submit>
            <div class="signup-row">
                <input
                    type="email"
                    class="signup-input"
                    placeholder="Enter your email"
                    aria-label="Email address"
                    required=true
                    prop:value=move || form.email()
                    on:input=move |e| form.set_email(event_target_value(&e))
                />
                <button
                    type="submit"
                    class="btn btn-primary signup-button"
                    disabled=move || form.is_submitting()
                >
                    {move || if form.is_submitting() { variant.busy_label() } else { variant.idle_label() }}
                </button>
            </div>
        </form>
    }
}
