use super::*;

fn website() -> Website {
    Website {
        lang: "en".to_owned(),
        support_lang: vec!["en".to_owned(), "zh".to_owned(), "ja".to_owned()],
        lang_map: [("en", "English"), ("zh", "中文")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect(),
        auth_provider: Vec::new(),
    }
}

// =============================================================
// Labels
// =============================================================

#[test]
fn label_comes_from_language_map() {
    let locale = LocaleSelection::new(&website(), "zh");
    assert_eq!(locale.active_label(), "中文");
    assert_eq!(locale.label_for("en"), "English");
}

#[test]
fn unknown_label_falls_back_to_english() {
    let locale = LocaleSelection::new(&website(), "ja");
    assert_eq!(locale.active_label(), FALLBACK_LANGUAGE_LABEL);
}

#[test]
fn single_language_hides_control() {
    let mut site = website();
    site.support_lang.truncate(1);
    assert!(!LocaleSelection::new(&site, "en").is_multi());
    assert!(LocaleSelection::new(&website(), "en").is_multi());
}

// =============================================================
// switch_path
// =============================================================

#[test]
fn switch_replaces_leading_language_segment() {
    let locale = LocaleSelection::new(&website(), "zh");
    assert_eq!(locale.switch_path("ja", "/zh/models/gpt"), "/ja/models/gpt");
}

#[test]
fn switch_inserts_segment_when_absent() {
    let locale = LocaleSelection::new(&website(), "en");
    assert_eq!(locale.switch_path("zh", "/models/gpt/"), "/zh/models/gpt");
    assert_eq!(locale.switch_path("zh", "/"), "/zh");
    assert_eq!(locale.switch_path("zh", ""), "/zh");
}

#[test]
fn switch_only_strips_supported_codes() {
    let locale = LocaleSelection::new(&website(), "en");
    assert_eq!(locale.switch_path("zh", "/fr/about"), "/zh/fr/about");
}

#[test]
fn change_language_updates_active_code() {
    let mut locale = LocaleSelection::new(&website(), "en");
    let target = locale.change_language("zh", "/zh");
    assert_eq!(target, "/zh");
    assert_eq!(locale.active(), "zh");
    assert_eq!(locale.active_label(), "中文");
}

// =============================================================
// url_with_lang / match_path
// =============================================================

#[test]
fn default_language_urls_are_unprefixed() {
    let locale = LocaleSelection::new(&website(), "en");
    assert_eq!(locale.url_with_lang("/pricing"), "/pricing");
    assert_eq!(locale.url_with_lang("pricing"), "/pricing");
}

#[test]
fn other_language_urls_are_prefixed() {
    let locale = LocaleSelection::new(&website(), "zh");
    assert_eq!(locale.url_with_lang("/pricing"), "/zh/pricing");
    assert_eq!(locale.url_with_lang("/"), "/zh/");
}

#[test]
fn absolute_urls_pass_through() {
    let locale = LocaleSelection::new(&website(), "zh");
    assert_eq!(locale.url_with_lang("https://docs.example.com"), "https://docs.example.com");
    assert_eq!(locale.url_with_lang("http://x.io/a"), "http://x.io/a");
}

#[test]
fn match_path_ignores_language_segment() {
    let locale = LocaleSelection::new(&website(), "zh");
    assert!(locale.match_path("/pricing", "/zh/pricing"));
    assert!(locale.match_path("/", "/zh"));
    assert!(!locale.match_path("/pricing", "/zh/models"));
}

#[test]
fn match_path_only_strips_whole_leading_segment() {
    let locale = LocaleSelection::new(&website(), "zh");
    assert!(locale.match_path("/zhihu", "/zhihu"));
    assert!(locale.match_path("/about/zh", "/about/zh"));
}
