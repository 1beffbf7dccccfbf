// =============================================================================
// CornerInch Web - Countdown Timer Component
// =============================================================================

use leptos::prelude::*;

use crate::countdown::CountdownTarget;
use crate::ticker::use_countdown;
use crate::utils::pad2;

/// Live days/hours/minutes/seconds until `target`, refreshed every `tick_ms`.
#[component]
pub fn CountdownTimer(target: CountdownTarget, tick_ms: u32) -> impl IntoView {
    let remaining = use_countdown(target, tick_ms);

    view! {
        <Show
            when=move || !remaining.get().expired
            fallback=|| view! {
                <div class="countdown countdown-live">
                    <span class="countdown-live-label">"We're Live"</span>
                </div>
            }
        >
            <div class="countdown" role="timer" aria-live="off">
                {move || {
                    remaining
                        .get()
                        .units()
                        .into_iter()
                        .map(|(value, label)| view! {
                            <div class="countdown-unit">
                                <span class="countdown-value">{pad2(value)}</span>
                                <span class="countdown-label">{label}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
