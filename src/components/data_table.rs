//! Listing page body: heading, filter chips, record table and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered from the listing props the server injected for this page. The
//! table reads its filter selection from the current query string and
//! writes every change back as a full navigation, so the next payload is
//! always produced by the server for the new URL.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::pagination::Pagination;
use crate::state::login::LoginModalHandle;
use crate::state::session::SessionStore;
use crate::state::table::{
    Column, ListingProps, PageNavigation, SelectFilter, TableQuery, cell_text, resolve_page_request, total_pages,
};
use crate::util::browser;

fn join_class(extra: Option<&str>, base: &str) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("{extra} {base}"),
        None => base.to_owned(),
    }
}

#[component]
pub fn DataTable(props: ListingProps) -> impl IntoView {
    let location = use_location();
    let (search, pathname) = (location.search, location.pathname);
    let authenticated = expect_context::<SessionStore>().is_authenticated();
    let modal = expect_context::<LoginModalHandle>();

    let ListingProps {
        schema,
        data,
        filters,
        min_no_need_login_page,
    } = props;
    let current = data.page;
    let total = total_pages(data.total);

    let on_page_change = Callback::new(move |page: u32| {
        let query = TableQuery::parse(&search.get_untracked());
        let pathname = pathname.get_untracked();
        match resolve_page_request(&query, &pathname, page, authenticated, min_no_need_login_page) {
            PageNavigation::RequireLogin => {
                modal.show();
            }
            PageNavigation::Navigate(href) => browser::navigate_to(&href),
        }
    });

    let header_cells = schema
        .iter()
        .map(|column| {
            let class = join_class(
                column.class.as_deref(),
                "px-3 py-3 text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider",
            );
            view! { <th scope="col" class=class>{column.label.clone()}</th> }
        })
        .collect_view();

    let rows = data
        .data
        .into_iter()
        .map(|row| {
            let cells = schema
                .iter()
                .map(|column: &Column| {
                    let class = join_class(
                        column.cell_class.as_deref(),
                        "px-3 py-4 whitespace-nowrap text-sm text-gray-600 dark:text-gray-300",
                    );
                    view! { <td class=class>{cell_text(&row, &column.field)}</td> }
                })
                .collect_view();
            view! { <tr class="group hover:bg-gray-50 dark:hover:bg-gray-700">{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm overflow-hidden">
            <div class="px-4 sm:px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                    <h2 class="text-lg font-medium text-gray-900 dark:text-gray-100">{data.h2}</h2>
                    <div class="flex items-center gap-2 flex-wrap">
                        <FilterChips filters=filters/>
                    </div>
                </div>
                <div class="mt-4 -mx-4 sm:mx-0 overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-700">
                            <tr>{header_cells}</tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">{rows}</tbody>
                    </table>
                </div>
            </div>
            <Pagination current=current total=total on_page_change=on_page_change/>
        </div>
    }
}

/// One link per filter option. Selecting the active option clears it.
#[component]
fn FilterChips(filters: Vec<SelectFilter>) -> impl IntoView {
    let location = use_location();
    let (search, pathname) = (location.search, location.pathname);

    filters
        .into_iter()
        .flat_map(|filter| {
            let field = filter.field;
            filter.options.into_iter().map(move |option| (field.clone(), option))
        })
        .map(|(field, option)| {
            let value = option.value;
            let selected = {
                let (field, value) = (field.clone(), value.clone());
                Memo::new(move |_| TableQuery::parse(&search.get()).is_selected(&field, &value))
            };
            let href = move || {
                TableQuery::parse(&search.get())
                    .toggle_filter(&field, &value)
                    .href(&pathname.get())
            };
            let extra = option.class.unwrap_or_default();
            let class = move || {
                let base = "px-3 py-1 text-sm rounded-full transition-colors mb-2 sm:mb-0 flex items-center gap-2";
                let chip = join_class(Some(&extra), base);
                if selected.get() {
                    format!("{chip} bg-amber-100 text-amber-800 dark:bg-amber-900 dark:text-amber-200")
                } else {
                    chip
                }
            };
            view! {
                <a href=href rel="external" class=class>
                    {option.label}
                    <Show when=move || selected.get()>
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </Show>
                </a>
            }
        })
        .collect_view()
}
