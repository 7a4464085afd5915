//! Login modal: the mail form plus one entry per third-party provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal registers itself with the app's [`LoginModalHandle`] on mount,
//! so the header, the drawer and the data table page gate can open it
//! without holding a reference to it. Every successful sign-in ends in a
//! reload or a redirect; the modal never updates session state in place.
//!
//! Provider list comes from the injected website configuration. `mail` is
//! rendered first; everything else is listed under an "or" divider.

use leptos::prelude::*;

use super::mail_login::MailLogin;
use crate::net::types::{AuthProvider, Website};
use crate::state::login::{LoginModalHandle, LoginModalState};
use crate::util::i18n::I18n;

/// Window property Google Identity Services calls with the credential.
pub const GOOGLE_CALLBACK: &str = "siteGoogleCredential";

const GIS_CLIENT_SCRIPT: &str = "https://accounts.google.com/gsi/client";

const GITHUB_PATH: &str = "M12 2C6.477 2 2 6.477 2 12c0 4.42 2.87 8.17 6.84 9.5.5.08.66-.23.66-.5v-1.69c-2.77.6-3.36-1.34-3.36-1.34-.46-1.16-1.11-1.47-1.11-1.47-.91-.62.07-.6.07-.6 1 .07 1.53 1.03 1.53 1.03.87 1.52 2.34 1.07 2.91.83.09-.65.35-1.09.63-1.34-2.22-.25-4.55-1.11-4.55-4.92 0-1.11.38-2 1.03-2.71-.1-.25-.45-1.29.1-2.64 0 0 .84-.27 2.75 1.02.79-.22 1.65-.33 2.5-.33.85 0 1.71.11 2.5.33 1.91-1.29 2.75-1.02 2.75-1.02.55 1.35.2 2.39.1 2.64.65.71 1.03 1.6 1.03 2.71 0 3.82-2.34 4.66-4.57 4.91.36.31.69.92.69 1.85V21c0 .27.16.59.67.5C19.14 20.16 22 16.42 22 12A10 10 0 0012 2z";

#[component]
pub fn LoginModal(website: Website) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let handle = expect_context::<LoginModalHandle>();
    let state = RwSignal::new(LoginModalState::Closed);

    let registration = handle.register(move || {
        state.try_update(|s| *s = s.on_open_change(true));
    });
    on_cleanup(move || drop(registration));

    let has_mail = website.mail_provider().is_some();
    let others: Vec<AuthProvider> = website.other_providers().cloned().collect();

    let close = Callback::new(move |()| state.update(|s| *s = s.on_open_change(false)));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close.run(());
        }
    };

    view! {
        <Show when=move || state.get().is_open()>
            <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center" on:click=move |_| close.run(())>
                <div
                    class="relative bg-white rounded-lg p-6 shadow-lg max-w-md w-full"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <ModalHeading/>
                    <div class="space-y-4">
                        {has_mail.then(|| view! { <MailLogin/> })}
                        <ProviderList providers=others.clone()/>
                    </div>
                    <button
                        type="button"
                        class="absolute top-4 right-4 inline-flex items-center justify-center rounded-full h-6 w-6 hover:bg-gray-200"
                        aria-label=i18n.t("root.login.close", "Close")
                        on:click=move |_| close.run(())
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Optional title and description; each is omitted when untranslated.
#[component]
fn ModalHeading() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let title = Some(i18n.t("root.login.title", "")).filter(|t| !t.is_empty());
    let description = Some(i18n.t("root.login.description", "")).filter(|d| !d.is_empty());

    view! {
        {title.map(|t| view! { <h2 class="text-xl font-bold mb-4">{t}</h2> })}
        {description.map(|d| view! { <p class="text-sm text-gray-500 mb-4">{d}</p> })}
    }
}

#[component]
fn ProviderList(providers: Vec<AuthProvider>) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    if providers.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="relative my-4">
            <div class="absolute inset-0 flex items-center">
                <div class="w-full border-t border-gray-300"></div>
            </div>
            <div class="relative flex justify-center text-sm">
                <span class="px-2 bg-white text-gray-500">{i18n.t("root.login.orLoginWith", "or login with")}</span>
            </div>
        </div>
        {providers
            .into_iter()
            .map(|provider| match &provider {
                AuthProvider::Github { .. } => {
                    let href = provider.github_authorize_url().unwrap_or_default();
                    view! { <GithubLogin href=href/> }.into_any()
                }
                AuthProvider::Google { client_id } => view! { <GoogleLogin client_id=client_id.clone()/> }.into_any(),
                AuthProvider::Generic { name } => {
                    let name = name.clone();
                    view! {
                        <button type="button" disabled class="w-full bg-blue-600 text-white py-2 px-4 rounded-md opacity-60">
                            {name}
                        </button>
                    }
                    .into_any()
                }
                AuthProvider::Mail => ().into_any(),
            })
            .collect_view()}
    }
    .into_any()
}

#[component]
fn GithubLogin(href: String) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    view! {
        <a
            href=href
            rel="external"
            class="w-full flex items-center justify-center px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm text-sm font-medium text-gray-700 dark:text-gray-200 bg-white dark:bg-gray-700 hover:bg-gray-50 dark:hover:bg-gray-600 transition-colors"
        >
            <svg class="h-5 w-5 mr-2" fill="currentColor" viewBox="0 0 24 24">
                <path fill-rule="evenodd" clip-rule="evenodd" d=GITHUB_PATH></path>
            </svg>
            {i18n.t("root.login.github", "Login with GitHub")}
        </a>
    }
}

/// Google Identity Services button. The GIS script renders the button into
/// `g_id_signin` and reports the credential through [`GOOGLE_CALLBACK`].
#[component]
fn GoogleLogin(client_id: String) -> impl IntoView {
    install_google_callback();

    view! {
        <script src=GIS_CLIENT_SCRIPT></script>
        <div
            id="g_id_onload"
            data-client_id=client_id
            data-callback=GOOGLE_CALLBACK
            data-auto_prompt="false"
        ></div>
        <div class="g_id_signin flex justify-center" data-type="standard"></div>
    }
}

/// Expose the credential handler on `window` while the button is mounted.
fn install_google_callback() {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        use crate::net::api::{self, GoogleLoginOutcome};
        use crate::state::login::LOGIN_FAILED;
        use crate::state::session;
        use crate::state::toast::NotificationBus;
        use crate::util::browser;
        use crate::util::storage::LocalStorage;

        let i18n = expect_context::<I18n>();
        let bus = expect_context::<NotificationBus>();
        let alive = Arc::new(AtomicBool::new(true));

        let callback = {
            let alive = Arc::clone(&alive);
            Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
                let credential = match js_sys::JSON::stringify(&response) {
                    Ok(s) => String::from(s),
                    Err(e) => {
                        log::error!("google credential not serializable: {e:?}");
                        return;
                    }
                };
                let alive = Arc::clone(&alive);
                let bus = bus.clone();
                leptos::task::spawn_local(async move {
                    let result = api::login_with_google(credential).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(GoogleLoginOutcome::Redirect(url)) => browser::navigate_to(&url),
                        Ok(GoogleLoginOutcome::Session(user)) => {
                            session::save_user_info(&LocalStorage, &user);
                            browser::reload();
                        }
                        Err(e) => {
                            log::error!("google sign-in failed: {e}");
                            let body = i18n.with(|t| e.user_message(t, LOGIN_FAILED)).unwrap_or_default();
                            bus.error(i18n.msg(LOGIN_FAILED), body);
                        }
                    }
                });
            })
        };

        let key = JsValue::from_str(GOOGLE_CALLBACK);
        if let Some(window) = web_sys::window() {
            if let Err(e) = js_sys::Reflect::set(&window, &key, callback.as_ref()) {
                log::warn!("could not install google callback: {e:?}");
            }
        }

        let stored = StoredValue::new_local(Some(callback));
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            if let Some(window) = web_sys::window() {
                let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(GOOGLE_CALLBACK));
            }
            stored.try_update_value(Option::take);
        });
    }
}
