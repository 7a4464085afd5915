//! Email + password sign-in and registration form.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures and server rejections are shown inline under the
//! form (code-request failures under the code field). Nothing is retried.
//! A response that arrives after the form unmounted is ignored: no session
//! is saved and the page is not reloaded.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::login::{AuthMode, CodeRequestStep, MailLoginForm, SubmitStep};
#[cfg(feature = "hydrate")]
use crate::state::session;
#[cfg(feature = "hydrate")]
use crate::util::browser;
use crate::util::i18n::I18n;
#[cfg(feature = "hydrate")]
use crate::util::storage::LocalStorage;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500";

/// Tick the resend countdown once a second until it reaches zero.
#[cfg(feature = "hydrate")]
fn run_countdown(form: RwSignal<MailLoginForm>, alive: Arc<AtomicBool>) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            if !form.try_update(MailLoginForm::tick).unwrap_or(false) {
                break;
            }
        }
    });
}

#[component]
pub fn MailLogin() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let form = RwSignal::new(MailLoginForm::default());

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_submit = {
        let alive = Arc::clone(&alive);
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(SubmitStep::Send(request)) = form.try_update(MailLoginForm::begin_submit) else {
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let alive = Arc::clone(&alive);
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::login_with_mail(&request).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    if let Err(e) = &result {
                        log::error!("mail sign-in failed: {e}");
                    }
                    if let Some(user) = form.try_update(|f| f.finish_submit(result)).flatten() {
                        session::save_user_info(&LocalStorage, &user);
                        browser::reload();
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (request, &alive);
            }
        }
    };

    let on_request_code = move |_| {
        let Some(CodeRequestStep::Send(email)) = form.try_update(MailLoginForm::begin_code_request) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_verification_code(&email).await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                if let Err(e) = &result {
                    log::error!("verification code request failed: {e}");
                }
                if form.try_update(|f| f.finish_code_request(result)).unwrap_or(false) {
                    run_countdown(form, alive);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, &alive);
        }
    };

    let is_register = move || form.with(|f| f.mode == AuthMode::Register);
    let code_button_label = move || {
        form.with(|f| {
            let remaining = f.countdown().remaining();
            if f.is_sending_code() {
                i18n.t("root.login.sending", "Sending...")
            } else if remaining > 0 {
                format!("{remaining}s")
            } else {
                i18n.t("root.login.getVerificationCode", "Get Code")
            }
        })
    };
    let submit_label = move || {
        form.with(|f| match (f.is_busy(), f.mode) {
            (true, _) => i18n.t("root.login.processing", "Processing..."),
            (false, AuthMode::Login) => i18n.t("root.login.loginButton", "Login"),
            (false, AuthMode::Register) => i18n.t("root.login.registerButton", "Register"),
        })
    };
    let error_text = move || i18n.with(|t| form.with(|f| f.error_text(t))).flatten();
    let code_error_text = move || i18n.with(|t| form.with(|f| f.code_error_text(t))).flatten();

    view! {
        <div class="w-full">
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700 mb-1">
                        {i18n.t("root.login.email", "Email")}
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        placeholder=i18n.t("root.login.emailPlaceholder", "Enter your email")
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 mb-1">
                        {i18n.t("root.login.password", "Password")}
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        placeholder=i18n.t("root.login.passwordPlaceholder", "Enter your password")
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <Show when=is_register>
                    <div>
                        <label for="verificationCode" class="block text-sm font-medium text-gray-700 mb-1">
                            {i18n.t("root.login.verificationCode", "Verification Code")}
                        </label>
                        <div class="flex space-x-2">
                            <input
                                id="verificationCode"
                                type="text"
                                class=INPUT_CLASS
                                placeholder=i18n.t("root.login.verificationCodePlaceholder", "Enter the code")
                                prop:value=move || form.with(|f| f.verification_code.clone())
                                on:input=move |ev| form.update(|f| f.verification_code = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="verification-code-btn whitespace-nowrap px-3 py-2 text-sm rounded-md bg-gray-100 text-gray-700 disabled:opacity-50"
                                disabled=move || form.with(|f| !f.can_request_code())
                                on:click=on_request_code.clone()
                            >
                                {code_button_label}
                            </button>
                        </div>
                        {move || code_error_text().map(|msg| view! { <p class="mt-1 text-sm text-red-600">{msg}</p> })}
                    </div>
                </Show>
                {move || error_text().map(|msg| view! { <p class="text-sm text-red-600">{msg}</p> })}
                <button
                    type="submit"
                    class="w-full py-2 px-4 rounded-md bg-amber-600 text-white font-medium disabled:opacity-50"
                    disabled=move || form.with(MailLoginForm::is_busy)
                >
                    {submit_label}
                </button>
            </form>
            <div class="mt-4 text-center">
                <button type="button" class="text-sm text-amber-600 hover:underline" on:click=move |_| form.update(MailLoginForm::toggle_mode)>
                    {move || {
                        if is_register() {
                            i18n.t("root.login.haveAccount", "Already have an account? Login")
                        } else {
                            i18n.t("root.login.noAccount", "No account? Register")
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
