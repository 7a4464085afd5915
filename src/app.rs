//! Root application component and the server-side HTML shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders [`shell`] with the page's [`SiteGlobals`]. The shell
//! embeds the same globals as a JSON `<script>` so the browser entry point
//! hydrates from exactly what the server rendered. Everything shared by the
//! layout (translations, session, locale, login modal, notifications) is
//! provided as context by [`App`].

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::data_table::DataTable;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::login_modal::LoginModal;
use crate::components::toast::Toast;
use crate::net::types::{GLOBALS_ELEMENT_ID, PageProps, SiteGlobals};
use crate::state::locale::LocaleSelection;
use crate::state::login::LoginModalHandle;
use crate::state::session::SessionStore;
use crate::state::toast::NotificationBus;
use crate::util::i18n::I18n;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host must provide `leptos_router::location::RequestUrl` for the
/// request being rendered.
pub fn shell(options: LeptosOptions, globals: SiteGlobals) -> impl IntoView {
    let lang = globals.lang.clone();
    let embedded = globals.to_script_json();

    view! {
        <!DOCTYPE html>
        <html lang=lang class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=GLOBALS_ELEMENT_ID type="application/json" inner_html=embedded></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App globals=globals/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared layout contexts and renders header, page body,
/// footer and the overlay surfaces.
#[component]
pub fn App(globals: SiteGlobals) -> impl IntoView {
    provide_meta_context();

    let SiteGlobals {
        translations,
        website,
        user,
        lang,
        page,
    } = globals;

    let i18n = I18n::new(translations);
    let locale = RwSignal::new(LocaleSelection::new(&website, &lang));

    provide_context(i18n);
    provide_context(SessionStore::new(user));
    provide_context(locale);
    provide_context(LoginModalHandle::default());
    provide_context(NotificationBus::default());

    let title = i18n.t("root.header.title", "");

    view! {
        <Stylesheet id="leptos" href="/pkg/site-ui.css"/>
        <Title text=title/>

        <Router>
            <Header/>
            <main class="min-h-screen pt-16">
                {match page {
                    PageProps::Listing(props) => view! { <DataTable props=props/> }.into_any(),
                    PageProps::Blank => ().into_any(),
                }}
            </main>
            <Footer/>
            <LoginModal website=website/>
            <Toast/>
        </Router>
    }
}
