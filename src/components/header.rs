//! Fixed site header: logo, navigation, language menu, theme toggle and
//! the login button or user menu. Below `md` it collapses into a hamburger
//! that opens [`MobileDrawer`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the header for the session and language it injected;
//! after hydration the header only adds client-side visual state (scroll
//! style, theme, open menus). Language change and logout leave the page.
//!
//! TRADE-OFFS
//! ==========
//! The server cannot see `localStorage`, so it always renders the dark
//! theme and the client corrects it once the header mounts.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::mobile_drawer::MobileDrawer;
use crate::net::types::{HeaderInfo, NavItem, User};
use crate::state::locale::LocaleSelection;
use crate::state::login::LoginModalHandle;
use crate::state::nav::{DrawerAction, DrawerState};
#[cfg(feature = "hydrate")]
use crate::state::nav::is_scrolled;
use crate::state::session::{self, SessionStore};
use crate::state::theme::ThemeState;
#[cfg(feature = "hydrate")]
use crate::util::browser;
use crate::util::browser::ScrollLock;
use crate::util::dark_mode;
#[cfg(feature = "hydrate")]
use crate::util::dark_mode::SystemThemeListener;
use crate::util::i18n::I18n;
use crate::util::storage::LocalStorage;

pub(super) const SUN_PATH: &str = "M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zm-.464 4.95l.707.707a1 1 0 001.414-1.414l-.707-.707a1 1 0 00-1.414 1.414zm2.12-10.607a1 1 0 010 1.414l-.706.707a1 1 0 11-1.414-1.414l.707-.707a1 1 0 011.414 0zM17 11a1 1 0 100-2h-1a1 1 0 100 2h1zm-7 4a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1zM5.05 6.464A1 1 0 106.465 5.05l-.708-.707a1 1 0 00-1.414 1.414l.707.707zm1.414 8.486l-.707.707a1 1 0 01-1.414-1.414l.707-.707a1 1 0 011.414 1.414zM4 11a1 1 0 100-2H3a1 1 0 000 2h1z";
pub(super) const MOON_PATH: &str = "M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z";

/// Recompute `scrolled` on every scroll event and once right after mount.
fn watch_scroll(scrolled: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        let update = move || scrolled.set(is_scrolled(browser::scroll_y()));
        Effect::new(move |_| update());
        let handle = window_event_listener(leptos::ev::scroll, move |_| update());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scrolled;
    }
}

/// Load the stored theme after mount and follow system changes while no
/// preference is stored.
fn follow_theme(theme: RwSignal<ThemeState>) {
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            let loaded = ThemeState::load(&LocalStorage);
            dark_mode::apply(loaded.is_dark());
            theme.set(loaded);
        });
        let listener = SystemThemeListener::attach(move |prefers_dark| {
            if theme.try_update(|t| t.on_system_change(prefers_dark)).unwrap_or(false) {
                dark_mode::apply(prefers_dark);
            }
        });
        let listener = StoredValue::new_local(Some(listener));
        on_cleanup(move || {
            let _ = listener.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Hold a [`ScrollLock`] exactly while the drawer is open.
fn lock_scroll_while_open(drawer: RwSignal<DrawerState>) {
    let lock = StoredValue::new(None::<ScrollLock>);
    Effect::new(move |_| {
        let open = drawer.get().is_open();
        lock.update_value(|held| {
            if !open {
                *held = None;
            } else if held.is_none() {
                *held = Some(ScrollLock::acquire());
            }
        });
    });
    on_cleanup(move || {
        let _ = lock.try_update_value(Option::take);
    });
}

fn toggle_theme(theme: RwSignal<ThemeState>) {
    theme.update(|t| t.toggle(&LocalStorage));
    dark_mode::apply(theme.get_untracked().is_dark());
}

/// Drop the stored preference and follow the system scheme from now on.
fn use_system_theme(theme: RwSignal<ThemeState>) {
    let prefers_dark = dark_mode::system_prefers_dark();
    theme.update(|t| t.use_system(&LocalStorage, prefers_dark));
    dark_mode::apply(prefers_dark);
}

#[component]
pub fn Header() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let session = expect_context::<SessionStore>();
    let locale = expect_context::<RwSignal<LocaleSelection>>();
    let modal = expect_context::<LoginModalHandle>();
    let pathname = use_location().pathname;

    let header = i18n
        .with(|t| t.get_translations("root.header", HeaderInfo::default()))
        .unwrap_or_default();
    let user = session.get_user().cloned();
    let nav: Vec<NavItem> = header
        .nav
        .into_iter()
        .filter(|item| item.is_visible(user.is_some()))
        .collect();

    let scrolled = RwSignal::new(false);
    let theme = RwSignal::new(ThemeState::default());
    let drawer = RwSignal::new(DrawerState::default());
    watch_scroll(scrolled);
    follow_theme(theme);
    lock_scroll_while_open(drawer);

    let on_toggle_theme = Callback::new(move |()| toggle_theme(theme));
    let on_use_system = Callback::new(move |()| use_system_theme(theme));
    let on_change_language = Callback::new(move |code: String| {
        let path = pathname.get_untracked();
        locale.update(|l| {
            l.change_language(&code, &path);
        });
    });
    let on_login = Callback::new(move |()| {
        modal.show();
    });
    let on_logout = Callback::new(move |()| session::logout());

    let title = i18n.text(&header.title);
    let logo = header.logo;

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent border-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="md:!hidden flex justify-between h-16 items-center px-4">
                    <Logo logo=logo.clone() title=title.clone()/>
                    <div class="flex items-center space-x-2">
                        <ThemeToggle theme=theme scrolled=scrolled on_toggle=on_toggle_theme/>
                        <button
                            class="p-2 rounded-md border border-amber-500 text-amber-500"
                            aria-label=move || i18n.t("menu", "Menu")
                            on:click=move |_| drawer.update(|d| *d = d.apply(DrawerAction::Toggle))
                        >
                            <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                    </div>
                </div>
                <div class="hidden md:flex justify-between h-16 items-center">
                    <Logo logo=logo title=title/>
                    <NavLinks nav=nav.clone() scrolled=scrolled/>
                    <div class="flex items-center space-x-6">
                        <LanguageMenu scrolled=scrolled on_change=on_change_language/>
                        <ThemeToggle theme=theme scrolled=scrolled on_toggle=on_toggle_theme/>
                        <UserMenu user=user.clone() scrolled=scrolled on_login=on_login on_logout=on_logout/>
                    </div>
                </div>
            </div>
            <MobileDrawer
                drawer=drawer
                theme=theme
                nav=nav
                user=user
                on_toggle_theme=on_toggle_theme
                on_use_system=on_use_system
                on_change_language=on_change_language
                on_login=on_login
                on_logout=on_logout
            />
        </nav>
    }
}

#[component]
fn Logo(logo: String, title: String) -> impl IntoView {
    let has_logo = !logo.is_empty();
    view! {
        <div class="flex-shrink-0 flex items-center">
            <a href="/" rel="external" class="flex items-center">
                {has_logo.then(|| view! { <img src=logo alt="logo" class="h-8 w-8"/> })}
                <span class=if has_logo { "ml-2" } else { "text-xl font-bold text-amber-600" }>{title}</span>
            </a>
        </div>
    }
}

#[component]
fn NavLinks(nav: Vec<NavItem>, scrolled: RwSignal<bool>) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let locale = expect_context::<RwSignal<LocaleSelection>>();
    let pathname = use_location().pathname;

    let links = nav
        .into_iter()
        .map(|item| {
            let href = locale.with_untracked(|l| l.url_with_lang(&item.url));
            let url = item.url;
            let class = move || {
                let active = locale.with(|l| l.match_path(&url, &pathname.get()));
                let tone = match (active, scrolled.get()) {
                    (true, true) => "text-amber-500 bg-white/5",
                    (true, false) => "text-white bg-white/10",
                    (false, true) => "text-gray-400 hover:text-gray-100 hover:bg-white/5",
                    (false, false) => "text-white/90 hover:text-white hover:bg-white/10",
                };
                format!("px-3 py-2 font-medium text-sm transition-colors rounded-md {tone}")
            };
            view! { <a href=href rel="external" class=class>{i18n.text(&item.text)}</a> }
        })
        .collect_view();

    view! {
        <div class="hidden md:flex items-center justify-center flex-1">
            <div class="flex space-x-8">{links}</div>
        </div>
    }
}

#[component]
pub(super) fn ThemeToggle(theme: RwSignal<ThemeState>, scrolled: RwSignal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let dark = move || theme.with(|t| t.is_dark());
    view! {
        <button
            class=move || {
                if scrolled.get() {
                    "text-gray-600 dark:text-gray-400 hover:text-amber-500 transition-colors"
                } else {
                    "text-gray-400 dark:text-gray-600 hover:text-amber-500 transition-colors"
                }
            }
            aria-label=move || if dark() { i18n.t("theme.light", "Light Mode") } else { i18n.t("theme.dark", "Dark Mode") }
            on:click=move |_| on_toggle.run(())
        >
            <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 20 20">
                <path d=move || if dark() { SUN_PATH } else { MOON_PATH }/>
            </svg>
        </button>
    }
}

#[component]
fn LanguageMenu(scrolled: RwSignal<bool>, on_change: Callback<String>) -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleSelection>>();
    let open = RwSignal::new(false);

    let options = StoredValue::new(locale.with_untracked(|l| {
        l.supported()
            .iter()
            .map(|code| (code.clone(), l.label_for(code)))
            .collect::<Vec<_>>()
    }));
    let items = move || {
        options
            .get_value()
            .into_iter()
            .map(|(code, label)| {
                let selected = {
                    let code = code.clone();
                    move || locale.with(|l| l.active() == code)
                };
                view! {
                    <button
                        class="flex w-full justify-end px-3 py-2 text-sm hover:bg-gray-100 dark:hover:bg-gray-800"
                        on:click=move |_| {
                            open.set(false);
                            on_change.run(code.clone());
                        }
                    >
                        <Show when=selected.clone()>
                            <svg class="inline-block h-4 w-4 mr-1" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/>
                            </svg>
                        </Show>
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || locale.with(LocaleSelection::is_multi)>
            <div class="relative">
                <button
                    type="button"
                    class=move || {
                        if scrolled.get() {
                            "flex items-center text-gray-700 dark:text-gray-300 hover:text-amber-600 transition-colors"
                        } else {
                            "flex items-center text-gray-400 dark:text-gray-600 hover:text-white transition-colors"
                        }
                    }
                    on:click=move |_| open.update(|o| *o = !*o)
                >
                    <span class="mr-1">{move || locale.with(LocaleSelection::active_label)}</span>
                    "▾"
                </button>
                <Show when=move || open.get()>
                    <div class="absolute right-0 mt-2 w-40 rounded-md shadow-lg bg-white dark:bg-gray-900">
                        {items}
                    </div>
                </Show>
            </div>
        </Show>
    }
}

/// Avatar image, or the uppercased initial on an amber disc.
#[component]
pub(super) fn Avatar(user: User) -> impl IntoView {
    match user.avatar() {
        Some(src) => view! { <img src=src.to_owned() alt="avatar" class="h-8 w-8 rounded-full"/> }.into_any(),
        None => view! {
            <div class="h-8 w-8 rounded-full bg-amber-600 flex items-center justify-center text-white">
                {user.avatar_initial()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn UserMenu(
    user: Option<User>,
    scrolled: RwSignal<bool>,
    on_login: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let Some(user) = user else {
        return view! {
            <button
                class=move || {
                    if scrolled.get() {
                        "px-4 py-1.5 rounded-md border border-gray-400 text-gray-600 dark:text-gray-300"
                    } else {
                        "px-4 py-1.5 rounded-md border border-amber-500 text-amber-500"
                    }
                }
                on:click=move |_| on_login.run(())
            >
                {i18n.t("root.login_button", "Login")}
            </button>
        }
        .into_any();
    };

    let open = RwSignal::new(false);
    let name = user.display_name().to_owned();
    view! {
        <div class="relative">
            <button
                type="button"
                class="flex items-center transition-colors"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <Avatar user=user/>
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-48 rounded-md shadow-lg bg-white dark:bg-gray-900 py-1">
                    <span class="block px-3 py-2 text-sm font-medium">{name.clone()}</span>
                    <hr class="border-gray-200 dark:border-gray-700"/>
                    <button
                        class="block w-full text-left px-3 py-2 text-sm hover:bg-gray-100 dark:hover:bg-gray-800"
                        on:click=move |_| on_logout.run(())
                    >
                        {i18n.t("root.logout_button", "Logout")}
                    </button>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
