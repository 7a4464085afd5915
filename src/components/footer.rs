//! Site footer rendered from the `root.footer` translation namespace.

use leptos::prelude::*;

use crate::net::types::FooterInfo;
use crate::util::i18n::I18n;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let info = i18n
        .with(|t| t.get_translations("root.footer", FooterInfo::default()))
        .unwrap_or_default();

    let title = i18n.text(&info.title);
    let logo = (!info.logo.is_empty()).then(|| {
        let alt = title.clone();
        view! { <img src=info.logo.clone() alt=alt class="h-8 w-8"/> }
    });
    let title_class = if info.logo.is_empty() { "text-xl text-amber-600 font-semibold" } else { "ml-2" };

    let social = info
        .social
        .iter()
        .map(|link| {
            view! {
                <a target="_blank" rel="external" href=link.url.clone() class="text-gray-600">
                    {link.label().to_owned()}
                </a>
            }
        })
        .collect_view();

    let groups = info
        .links
        .iter()
        .map(|group| {
            let links = group
                .links
                .iter()
                .map(|link| {
                    view! {
                        <li>
                            <a href=link.url.clone() target=link.target() rel="external" class="text-gray-600">
                                {link.text.clone()}
                            </a>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="text-center md:text-right min-w-max px-3">
                    <h2 class="text-white font-medium">{i18n.text(&group.title)}</h2>
                    <ul class="mt-4 space-y-2">{links}</ul>
                </div>
            }
        })
        .collect_view();

    let last_policy = info.policy.len().saturating_sub(1);
    let policy = info
        .policy
        .iter()
        .enumerate()
        .map(|(index, link)| {
            view! {
                <a href=link.url.clone() rel="external" class="text-gray-500 text-sm">{i18n.text(&link.text)}</a>
                {(index < last_policy).then(|| view! { <span class="mx-2 text-gray-500">"|"</span> })}
            }
        })
        .collect_view();

    view! {
        <footer class="py-12 w-full bg-gray-50 dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between md:items-center">
                    <div class="flex flex-col items-center md:items-start text-center md:text-left">
                        <div class="flex items-center">
                            {logo}
                            <span class=title_class>{title}</span>
                        </div>
                        <p class="mt-4 text-gray-600 dark:text-gray-400">{i18n.text(&info.desc)}</p>
                        <div class="flex space-x-4 mt-4">{social}</div>
                    </div>
                    <div class="mt-8 md:mt-0 text-center md:text-right">
                        <div class="flex flex-row justify-center md:justify-end overflow-x-auto md:gap-8">{groups}</div>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t pb-4 border-gray-700 dark:border-gray-900">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-gray-500 text-sm">{i18n.text(&info.copyright)}</p>
                        <div class="mt-4 md:mt-0">{policy}</div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
