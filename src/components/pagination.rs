//! Previous / page numbers / next bar for listing pages.

use leptos::prelude::*;

use crate::state::table::{PageItem, page_range};
use crate::util::i18n::I18n;

const ENABLED_STEP: &str = "relative inline-flex items-center px-4 py-2 border border-amber-300 text-sm font-medium rounded-md text-amber-700 bg-white hover:bg-amber-50 transition-colors dark:bg-gray-800 dark:text-amber-400 dark:hover:bg-gray-700";
const DISABLED_STEP: &str = "relative inline-flex items-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-400 bg-gray-50 cursor-not-allowed dark:bg-gray-800 dark:border-gray-700 dark:text-gray-500";

/// `on_page_change` receives the requested page; the bar itself keeps no state.
#[component]
pub fn Pagination(current: u32, total: u32, on_page_change: Callback<u32>) -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let has_prev = current > 1;
    let has_next = current < total;

    let pages = page_range(current, total)
        .into_iter()
        .map(|item| match item {
            PageItem::Ellipsis => view! { <span class="px-2 text-gray-500 dark:text-gray-400">"..."</span> }.into_any(),
            PageItem::Page(page) if page == current => view! {
                <span
                    aria-current="page"
                    class="relative inline-flex items-center px-4 py-2 border border-amber-300 text-sm font-medium rounded-md bg-amber-50 text-amber-700 dark:bg-amber-900 dark:text-amber-200"
                >
                    {page}
                </span>
            }
            .into_any(),
            PageItem::Page(page) => view! {
                <button
                    class="relative inline-flex items-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 transition-colors dark:bg-gray-800 dark:text-gray-300 dark:hover:bg-gray-700 dark:border-gray-600"
                    on:click=move |_| on_page_change.run(page)
                >
                    {page}
                </button>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="px-3 sm:px-6 py-4 flex items-center justify-between border-t border-gray-200 dark:border-gray-700">
            <div class="flex-1 flex justify-between sm:justify-center gap-4">
                <button
                    class=if has_prev { ENABLED_STEP } else { DISABLED_STEP }
                    disabled=!has_prev
                    on:click=move |_| {
                        if has_prev {
                            on_page_change.run(current - 1);
                        }
                    }
                >
                    {i18n.t("root.pagination.prev", "Previous")}
                </button>
                <div class="hidden sm:flex items-center gap-2">{pages}</div>
                <button
                    class=if has_next { ENABLED_STEP } else { DISABLED_STEP }
                    disabled=!has_next
                    on:click=move |_| {
                        if has_next {
                            on_page_change.run(current + 1);
                        }
                    }
                >
                    {i18n.t("root.pagination.next", "Next")}
                </button>
            </div>
        </div>
    }
}
