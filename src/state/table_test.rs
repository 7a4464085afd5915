use super::*;
use serde_json::json;

use PageItem::{Ellipsis, Page};

// =============================================================
// page_range
// =============================================================

#[test]
fn small_totals_list_every_page() {
    for total in 0..=FULL_RANGE_LIMIT {
        for current in 1..=total.max(1) {
            let range = page_range(current, total);
            let expected: Vec<PageItem> = (1..=total).map(Page).collect();
            assert_eq!(range, expected, "current={current} total={total}");
            assert!(!range.contains(&Ellipsis));
        }
    }
}

#[test]
fn near_start_shows_first_four_and_last() {
    assert_eq!(page_range(1, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
    assert_eq!(page_range(3, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
}

#[test]
fn near_end_shows_first_and_last_four() {
    assert_eq!(page_range(10, 10), vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
    assert_eq!(page_range(8, 10), vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
}

#[test]
fn middle_shows_window_around_current() {
    assert_eq!(
        page_range(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn eight_pages_switches_to_ellipsis_layout() {
    assert_eq!(page_range(4, 8), vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(8)]);
}

#[test]
fn range_always_contains_first_last_and_current() {
    for total in 8..=30 {
        for current in 1..=total {
            let range = page_range(current, total);
            assert_eq!(range.first(), Some(&Page(1)));
            assert_eq!(range.last(), Some(&Page(total)));
            assert!(range.contains(&Page(current)), "current={current} total={total}");
        }
    }
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0), 0);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(20), 1);
    assert_eq!(total_pages(21), 2);
    assert_eq!(total_pages(200), 10);
}

// =============================================================
// TableQuery
// =============================================================

#[test]
fn parse_accepts_leading_question_mark() {
    let q = TableQuery::parse("?status=open&page=3");
    assert_eq!(q.get("status"), Some("open"));
    assert_eq!(q.get("page"), Some("3"));
    assert_eq!(TableQuery::parse("status=open"), TableQuery::parse("?status=open"));
}

#[test]
fn toggle_selected_value_removes_parameter() {
    let q = TableQuery::parse("?type=a&status=open&page=2");
    let next = q.toggle_filter("status", "open");
    assert_eq!(next.get("status"), None);
    assert_eq!(next.to_query_string(), "type=a&page=2");
}

#[test]
fn toggle_new_value_replaces_in_place() {
    let q = TableQuery::parse("?type=a&status=open&page=2");
    let next = q.toggle_filter("status", "closed");
    assert_eq!(next.to_query_string(), "type=a&status=closed&page=2");
}

#[test]
fn toggle_unset_field_appends() {
    let q = TableQuery::parse("?page=2");
    assert_eq!(q.toggle_filter("status", "open").to_query_string(), "page=2&status=open");
}

#[test]
fn with_collapses_duplicate_keys() {
    let q = TableQuery::parse("?tag=a&x=1&tag=b");
    assert_eq!(q.with("tag", "c").to_query_string(), "tag=c&x=1");
}

#[test]
fn values_are_percent_encoded() {
    let q = TableQuery::default().with("q", "a b&c");
    assert_eq!(q.to_query_string(), "q=a+b%26c");
    assert_eq!(TableQuery::parse(&q.to_query_string()).get("q"), Some("a b&c"));
}

#[test]
fn href_joins_pathname_and_query() {
    let q = TableQuery::parse("?status=open");
    assert_eq!(q.with_page(4).href("/en/models"), "/en/models?status=open&page=4");
    assert_eq!(TableQuery::default().href("/models"), "/models?");
}

// =============================================================
// resolve_page_request
// =============================================================

#[test]
fn anonymous_viewer_past_threshold_gets_login() {
    let q = TableQuery::parse("?page=3");
    assert_eq!(resolve_page_request(&q, "/list", 4, false, 3), PageNavigation::RequireLogin);
    assert_eq!(q.get("page"), Some("3"));
}

#[test]
fn authenticated_viewer_navigates_past_threshold() {
    let q = TableQuery::parse("?page=3&status=open");
    assert_eq!(
        resolve_page_request(&q, "/list", 4, true, 3),
        PageNavigation::Navigate("/list?page=4&status=open".to_owned())
    );
}

#[test]
fn threshold_page_itself_is_open() {
    let q = TableQuery::default();
    assert_eq!(
        resolve_page_request(&q, "/list", 3, false, 3),
        PageNavigation::Navigate("/list?page=3".to_owned())
    );
}

#[test]
fn non_positive_threshold_disables_gate() {
    let q = TableQuery::default();
    for threshold in [-1, 0] {
        assert_eq!(
            resolve_page_request(&q, "/list", 50, false, threshold),
            PageNavigation::Navigate("/list?page=50".to_owned())
        );
    }
}

// =============================================================
// Payload
// =============================================================

#[test]
fn cell_text_renders_scalars() {
    let row = json!({ "name": "gpt", "price": 1.5, "free": false, "note": null })
        .as_object()
        .cloned()
        .unwrap_or_default();
    assert_eq!(cell_text(&row, "name"), "gpt");
    assert_eq!(cell_text(&row, "price"), "1.5");
    assert_eq!(cell_text(&row, "free"), "false");
    assert_eq!(cell_text(&row, "note"), "");
    assert_eq!(cell_text(&row, "missing"), "");
}

#[test]
fn listing_props_default_gate_is_disabled() {
    let props: ListingProps = serde_json::from_value(json!({
        "schema": [{ "label": "Name", "field": "name", "cellClass": "mono" }],
        "data": { "h2": "Models", "total": 45, "data": [] }
    }))
    .unwrap();
    assert_eq!(props.min_no_need_login_page, -1);
    assert_eq!(props.data.page, 1);
    assert_eq!(props.schema[0].cell_class.as_deref(), Some("mono"));
}

#[test]
fn listing_props_reads_camel_case_threshold() {
    let props: ListingProps = serde_json::from_value(json!({ "minNoNeedLoginPage": 2 })).unwrap();
    assert_eq!(props.min_no_need_login_page, 2);
}
