//! Slide-in navigation drawer for narrow viewports.
//!
//! Renders nothing while closed. Every control inside it closes the drawer
//! before (or instead of) doing its own work; the page scroll lock is held
//! by the header for as long as the drawer state is open.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::header::{Avatar, MOON_PATH, SUN_PATH};
use crate::net::types::{NavItem, User};
use crate::state::locale::LocaleSelection;
use crate::state::nav::{DrawerAction, DrawerState};
use crate::state::theme::ThemeState;
use crate::util::i18n::I18n;

const ACTIVE_ROW: &str = "bg-amber-700/10 text-amber-600";
const IDLE_ROW: &str = "text-gray-600 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-800";

#[component]
#[allow(clippy::too_many_arguments)]
pub fn MobileDrawer(
    drawer: RwSignal<DrawerState>,
    theme: RwSignal<ThemeState>,
    nav: Vec<NavItem>,
    user: Option<User>,
    on_toggle_theme: Callback<()>,
    on_use_system: Callback<()>,
    on_change_language: Callback<String>,
    on_login: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || drawer.get().is_open()>
            <DrawerPanel
                drawer=drawer
                theme=theme
                nav=nav.clone()
                user=user.clone()
                on_toggle_theme=on_toggle_theme
                on_use_system=on_use_system
                on_change_language=on_change_language
                on_login=on_login
                on_logout=on_logout
            />
        </Show>
    }
}

#[component]
#[allow(clippy::too_many_arguments)]
fn DrawerPanel(
    drawer: RwSignal<DrawerState>,
    theme: RwSignal<ThemeState>,
    nav: Vec<NavItem>,
    user: Option<User>,
    on_toggle_theme: Callback<()>,
    on_use_system: Callback<()>,
    on_change_language: Callback<String>,
    on_login: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let locale = expect_context::<RwSignal<LocaleSelection>>();
    let pathname = use_location().pathname;

    let act = move |action: DrawerAction| drawer.update(|d| *d = d.apply(action));
    let dark = move || theme.with(|t| t.is_dark());

    let links = nav
        .into_iter()
        .map(|item| {
            let href = locale.with_untracked(|l| l.url_with_lang(&item.url));
            let url = item.url;
            let class = move || {
                let active = locale.with(|l| l.match_path(&url, &pathname.get()));
                format!("block px-3 py-2 rounded-md transition-colors {}", if active { ACTIVE_ROW } else { IDLE_ROW })
            };
            (href, class, i18n.text(&item.text))
        })
        .collect::<Vec<_>>();

    let languages = locale.with_untracked(|l| {
        l.is_multi().then(|| {
            l.supported()
                .iter()
                .map(|code| (code.clone(), l.label_for(code)))
                .collect::<Vec<_>>()
        })
    });

    let footer = match user {
        Some(user) => {
            let name = user.display_name().to_owned();
            view! {
                <div class="flex items-center gap-2 mb-3">
                    <Avatar user=user/>
                    <span class="text-sm font-medium">{name}</span>
                </div>
                <button
                    class="w-full py-2 px-4 rounded-md bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-200 text-sm font-medium text-center"
                    on:click=move |_| {
                        act(DrawerAction::Logout);
                        on_logout.run(());
                    }
                >
                    {i18n.t("root.logout_button", "Logout")}
                </button>
            }
            .into_any()
        }
        None => view! {
            <button
                class="w-full py-2 px-4 rounded-md bg-amber-500 dark:bg-amber-600 text-white text-sm font-medium text-center shadow"
                on:click=move |_| {
                    act(DrawerAction::Login);
                    on_login.run(());
                }
            >
                {i18n.t("root.login_button", "Login")}
            </button>
        }
        .into_any(),
    };

    view! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-[9999]" on:click=move |_| act(DrawerAction::Backdrop)></div>
        <div class="fixed top-0 right-0 bottom-0 w-[280px] h-screen bg-white dark:bg-gray-900 z-[10000] shadow-[-4px_0_10px_rgba(0,0,0,0.1)] flex flex-col">
            <div class="flex items-center justify-between p-4 border-b border-gray-200 dark:border-gray-700">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{i18n.t("menu", "Menu")}</h2>
                <button class="p-2 rounded-md text-gray-500 dark:text-gray-400" aria-label="Close Menu" on:click=move |_| act(DrawerAction::Close)>
                    <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                    </svg>
                </button>
            </div>
            <div class="flex-1 overflow-y-auto p-4">
                <div class="flex flex-col gap-6">
                    <div class="flex flex-col gap-1">
                        <button
                            class="flex items-center w-full text-gray-600 dark:text-gray-200 py-2 text-left"
                            on:click=move |_| {
                                act(DrawerAction::ThemeToggled);
                                on_toggle_theme.run(());
                            }
                        >
                            <svg class="w-5 h-5 mr-3" fill="currentColor" viewBox="0 0 20 20">
                                <path d=move || if dark() { SUN_PATH } else { MOON_PATH }/>
                            </svg>
                            {move || if dark() { i18n.t("theme.light", "Light Mode") } else { i18n.t("theme.dark", "Dark Mode") }}
                        </button>
                        <Show when=move || theme.with(|t| t.preference().is_some())>
                            <button
                                class="w-full text-left text-sm text-gray-500 dark:text-gray-400 py-1"
                                on:click=move |_| {
                                    act(DrawerAction::ThemeToggled);
                                    on_use_system.run(());
                                }
                            >
                                {i18n.t("theme.system", "Follow System")}
                            </button>
                        </Show>
                    </div>
                    <div class="flex flex-col gap-1">
                        {links
                            .into_iter()
                            .map(|(href, class, text)| {
                                view! {
                                    <a href=href rel="external" class=class on:click=move |_| act(DrawerAction::NavLink)>
                                        {text}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    {languages.map(|languages| {
                        let buttons = languages
                            .into_iter()
                            .map(|(code, label)| {
                                let active = {
                                    let code = code.clone();
                                    move || locale.with(|l| l.active() == code)
                                };
                                let class = {
                                    let active = active.clone();
                                    move || format!(
                                        "flex items-center justify-between w-full px-3 py-2 rounded-md text-left {}",
                                        if active() { ACTIVE_ROW } else { IDLE_ROW },
                                    )
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| {
                                            act(DrawerAction::LanguageSelected);
                                            on_change_language.run(code.clone());
                                        }
                                    >
                                        <span>{label}</span>
                                        <Show when=active.clone()>
                                            <svg class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                                                <path fill-rule="evenodd" clip-rule="evenodd" d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z"/>
                                            </svg>
                                        </Show>
                                    </button>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="py-4 border-t border-gray-200 dark:border-gray-700">
                                <h3 class="text-sm font-medium text-gray-500 dark:text-gray-400 mb-3">
                                    {i18n.t("language", "Language")}
                                </h3>
                                <div class="flex flex-col gap-2">{buttons}</div>
                            </div>
                        }
                    })}
                </div>
            </div>
            <div class="p-4 border-t border-gray-200 dark:border-gray-700">{footer}</div>
        </div>
    }
}
