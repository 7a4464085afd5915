use super::*;
use serde_json::json;

fn sample() -> Translations {
    Translations::new(json!({
        "root": {
            "login": {
                "title": "Sign in",
                "description": "",
                "retry": 3,
            },
            "header": {
                "title": "Acme",
                "nav": [
                    { "text": "Home", "url": "/" },
                    { "text": "Docs", "url": "/docs" }
                ]
            }
        }
    }))
}

// =============================================================
// t
// =============================================================

#[test]
fn t_returns_value_at_dotted_path() {
    assert_eq!(sample().t("root.login.title", "Login"), "Sign in");
}

#[test]
fn t_returns_fallback_not_key_when_missing() {
    assert_eq!(sample().t("root.login.missing", "Default"), "Default");
}

#[test]
fn t_treats_empty_string_as_missing() {
    assert_eq!(sample().t("root.login.description", "Welcome back"), "Welcome back");
}

#[test]
fn t_falls_back_for_object_nodes() {
    assert_eq!(sample().t("root.login", "x"), "x");
}

#[test]
fn t_renders_scalar_numbers() {
    assert_eq!(sample().t("root.login.retry", "0"), "3");
}

#[test]
fn t_indexes_into_arrays() {
    assert_eq!(sample().t("root.header.nav.1.text", "?"), "Docs");
}

#[test]
fn t_on_empty_dictionary_uses_fallback() {
    assert_eq!(Translations::default().t("anything", "fb"), "fb");
    assert_eq!(Translations::default().t("", "fb"), "fb");
}

// =============================================================
// get_translations
// =============================================================

#[derive(Debug, Default, PartialEq, serde::Deserialize)]
struct HeaderShape {
    #[serde(default)]
    title: String,
    #[serde(default)]
    logo: String,
}

#[test]
fn get_translations_deserializes_namespace() {
    let header = sample().get_translations("root.header", HeaderShape::default());
    assert_eq!(header.title, "Acme");
    assert_eq!(header.logo, "");
}

#[test]
fn get_translations_returns_default_when_missing() {
    let default = HeaderShape { title: "Fallback".to_owned(), logo: String::new() };
    let header = sample().get_translations(
        "root.footer",
        HeaderShape { title: "Fallback".to_owned(), logo: String::new() },
    );
    assert_eq!(header, default);
}

#[test]
fn get_translations_returns_default_on_shape_mismatch() {
    let title: Vec<String> = sample().get_translations("root.login.title", vec!["x".to_owned()]);
    assert_eq!(title, vec!["x".to_owned()]);
}

// =============================================================
// MessageKey
// =============================================================

#[test]
fn message_key_resolves_through_translations() {
    const TITLE: MessageKey = MessageKey::new("root.login.title", "Login");
    const MISSING: MessageKey = MessageKey::new("root.login.nope", "Nope");
    let dict = sample();
    assert_eq!(TITLE.resolve(&dict), "Sign in");
    assert_eq!(MISSING.resolve(&dict), "Nope");
}

// =============================================================
// I18n handle
// =============================================================

#[test]
fn handle_translates_like_dictionary() {
    let i18n = I18n::new(sample());
    assert_eq!(i18n.t("root.login.title", "x"), "Sign in");
    assert_eq!(i18n.msg(MessageKey::new("root.nope", "Fallback")), "Fallback");
    assert_eq!(i18n.text("root.header.title"), "Acme");
    assert_eq!(i18n.text("Plain label"), "Plain label");
}
