//! Translation lookups over the injected dictionary.
//!
//! DESIGN
//! ======
//! Lookups never fail. A missing or empty entry resolves to the caller's
//! fallback (not the key), so every call site owns its default text and the
//! page still renders when a locale file is incomplete.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A translation key paired with the text used when the key is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageKey {
    pub key: &'static str,
    pub fallback: &'static str,
}

impl MessageKey {
    pub const fn new(key: &'static str, fallback: &'static str) -> Self {
        Self { key, fallback }
    }

    /// Resolve against `translations`.
    pub fn resolve(self, translations: &Translations) -> String {
        translations.t(self.key, self.fallback)
    }
}

/// Nested translation dictionary keyed by dotted path (`root.login.title`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(Value);

impl Translations {
    pub fn new(dict: Value) -> Self {
        Self(dict)
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        path.split('.').try_fold(&self.0, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Translate `path`, or return `fallback` verbatim.
    ///
    /// Strings must be non-empty to count as present; numbers and booleans
    /// render through their JSON text. Objects, arrays and `null` fall back.
    pub fn t(&self, path: &str, fallback: &str) -> String {
        match self.lookup(path) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => fallback.to_owned(),
        }
    }

    /// Deserialize the subtree at `path` into `T`, or return `default`.
    pub fn get_translations<T: DeserializeOwned>(&self, path: &str, default: T) -> T {
        match self.lookup(path) {
            Some(Value::Null) | None => default,
            Some(v) => T::deserialize(v).unwrap_or(default),
        }
    }
}

/// Copyable translation handle for view closures and event handlers.
#[derive(Clone, Copy)]
pub struct I18n(StoredValue<Translations>);

impl I18n {
    pub fn new(translations: Translations) -> Self {
        Self(StoredValue::new(translations))
    }

    /// [`Translations::t`]; after disposal every lookup falls back.
    pub fn t(self, path: &str, fallback: &str) -> String {
        self.0
            .try_with_value(|t| t.t(path, fallback))
            .unwrap_or_else(|| fallback.to_owned())
    }

    pub fn msg(self, key: MessageKey) -> String {
        self.t(key.key, key.fallback)
    }

    /// Translate a content string that doubles as its own key.
    pub fn text(self, key_or_text: &str) -> String {
        self.t(key_or_text, key_or_text)
    }

    pub fn with<R>(self, f: impl FnOnce(&Translations) -> R) -> Option<R> {
        self.0.try_with_value(f)
    }
}
