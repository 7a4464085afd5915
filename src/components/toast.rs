//! Toast surface: the display side of the notification bus.
//!
//! Mounted once by the app root. While mounted it is the bus's only
//! surface; unmounting drops the registration and later publishes are
//! dropped with a debug log.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::toast::NOTIFICATION_DELAY_MS;
use crate::state::toast::{NotificationBus, ToastState};

#[component]
pub fn Toast() -> impl IntoView {
    let bus = expect_context::<NotificationBus>();
    let state = RwSignal::new(ToastState::default());

    let registration = bus.attach(move |notification| {
        let Some(generation) = state.try_update(|s| s.show(notification)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTIFICATION_DELAY_MS).await;
            state.try_update(|s| s.expire(generation));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    });
    on_cleanup(move || drop(registration));

    let title_class = move || {
        let (_, title, _) = state.with(|s| s.notification.options.severity.classes());
        format!("font-medium mb-1 {title}")
    };
    let body_class = move || {
        let (_, _, body) = state.with(|s| s.notification.options.severity.classes());
        format!("text-sm {body}")
    };

    view! {
        <div
            role="status"
            aria-live="polite"
            class=move || state.with(ToastState::container_class)
        >
            <div class=title_class>{move || state.with(|s| s.notification.title.clone())}</div>
            <div class=body_class>{move || state.with(|s| s.notification.body.clone())}</div>
            <button
                class="absolute top-2 right-2 p-1 rounded-full hover:bg-black/5"
                aria-label="Close"
                on:click=move |_| state.update(ToastState::dismiss)
            >
                <svg width="14" height="14" viewBox="0 0 16 16" fill="none">
                    <path
                        d="M12 4L4 12M4 4L12 12"
                        stroke="currentColor"
                        stroke-width="1.5"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            </button>
        </div>
    }
}
