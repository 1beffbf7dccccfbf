// =============================================================================
// CornerInch Web - Toaster
// =============================================================================
// Renders the toast queue. Each toast owns a one-shot timer that dismisses it;
// the timer is cancelled if the toast leaves the queue first.
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::services::toasts::{Toast, ToastKind, Toasts};
use crate::state::AppState;

/// Toast stack, mounted once at the app root.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<AppState>().toasts;

    view! {
        <div class="toaster">
            <For
                each=move || toasts.snapshot()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: Toasts) -> impl IntoView {
    let id = toast.id;
    let timeout = Timeout::new(toasts.lifetime_ms(), move || toasts.dismiss(id));
    let timeout = StoredValue::new_local(Some(timeout));
    on_cleanup(move || {
        // Dropping the Timeout cancels it
        timeout.try_update_value(|t| t.take());
    });

    let role = match toast.notice.kind {
        ToastKind::Success => "status",
        ToastKind::Error => "alert",
    };

    view! {
        <div class=toast.notice.kind.class() role=role>
            <div class="toast-body">
                <p class="toast-title">{toast.notice.title}</p>
                <p class="toast-description">{toast.notice.description}</p>
            </div>
            <button class="toast-dismiss" aria-label="Dismiss" on:click=move |_| toasts.dismiss(id)>
                "✕"
            </button>
        </div>
    }
}
