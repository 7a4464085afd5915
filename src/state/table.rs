//! Query-string driven listing state: filters, page number, page range.
//!
//! DESIGN
//! ======
//! The table keeps no local state. Everything it shows is a pure function of
//! the current URL (`page` plus one parameter per filter field) and of the
//! server-provided payload. Every change produces a new URL and a full
//! navigation, so server and client always agree on what is displayed.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Records per page assumed when deriving the page count.
pub const PAGE_SIZE: u64 = 20;

/// Page counts up to this value list every page without ellipses.
pub const FULL_RANGE_LIMIT: u32 = 7;

pub const PAGE_PARAM: &str = "page";

/// Server payload for one listing page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub h2: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
}

fn first_page() -> u32 {
    1
}

/// A rendered column: header label plus the record field it reads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub field: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default, rename = "cellClass")]
    pub cell_class: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub class: Option<String>,
}

/// A filter field and its selectable values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectFilter {
    #[serde(default)]
    pub label: String,
    pub field: String,
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// Everything a listing page needs, as injected by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingProps {
    #[serde(default)]
    pub schema: Vec<Column>,
    #[serde(default)]
    pub data: TableData,
    #[serde(default)]
    pub filters: Vec<SelectFilter>,
    /// Highest page an anonymous viewer may open; `<= 0` disables the gate.
    #[serde(default = "gate_disabled")]
    pub min_no_need_login_page: i64,
}

fn gate_disabled() -> i64 {
    -1
}

/// Display text for a record cell.
pub fn cell_text(row: &Map<String, Value>, field: &str) -> String {
    match row.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// QUERY STRING
// =============================================================================

/// Ordered view over a URL query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableQuery {
    params: Vec<(String, String)>,
}

impl TableQuery {
    /// Parse `search`, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        Self {
            params: form_urlencoded::parse(raw.as_bytes()).into_owned().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Replace the first `key` in place (appending if absent) and drop duplicates.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        let mut replaced = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if replaced {
                return false;
            }
            value.clone_into(v);
            replaced = true;
            true
        });
        if !replaced {
            self.params.push((key.to_owned(), value.to_owned()));
        }
        self
    }

    #[must_use]
    pub fn without(mut self, key: &str) -> Self {
        self.params.retain(|(k, _)| k != key);
        self
    }

    /// Whether `field` is currently filtered to exactly `value`.
    pub fn is_selected(&self, field: &str, value: &str) -> bool {
        self.get(field) == Some(value)
    }

    /// Select `value` for `field`, or deselect it when already selected.
    #[must_use]
    pub fn toggle_filter(self, field: &str, value: &str) -> Self {
        if self.is_selected(field, value) {
            self.without(field)
        } else {
            self.with(field, value)
        }
    }

    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        self.with(PAGE_PARAM, &page.to_string())
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Link target for this query on `pathname`.
    pub fn href(&self, pathname: &str) -> String {
        format!("{pathname}?{}", self.to_query_string())
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// One slot in the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

pub fn total_pages(total_records: u64) -> u32 {
    u32::try_from(total_records.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Page numbers to display for `current` out of `total`.
pub fn page_range(current: u32, total: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= FULL_RANGE_LIMIT {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![Page(1), Ellipsis, Page(total - 3), Page(total - 2), Page(total - 1), Page(total)]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

/// What a request to open `page` should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageNavigation {
    /// Discard the change and ask the viewer to sign in.
    RequireLogin,
    /// Full navigation to this href.
    Navigate(String),
}

/// Apply the anonymous-viewer page gate, then build the target URL.
pub fn resolve_page_request(
    query: &TableQuery,
    pathname: &str,
    page: u32,
    authenticated: bool,
    min_no_need_login_page: i64,
) -> PageNavigation {
    if min_no_need_login_page > 0 && !authenticated && i64::from(page) > min_no_need_login_page {
        return PageNavigation::RequireLogin;
    }
    PageNavigation::Navigate(query.clone().with_page(page).href(pathname))
}
