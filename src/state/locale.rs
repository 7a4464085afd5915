//! Active language, language switching and language-aware links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages in the default language live at unprefixed paths (`/pricing`);
//! every other language lives under its code (`/zh/pricing`). Switching
//! language is always a full navigation so the server renders the page in
//! the new language; nothing is re-rendered in place.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::collections::BTreeMap;

use crate::net::types::Website;
use crate::util::browser;

/// Label shown when the language map has no entry for a code.
pub const FALLBACK_LANGUAGE_LABEL: &str = "English";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleSelection {
    active: String,
    default_lang: String,
    supported: Vec<String>,
    labels: BTreeMap<String, String>,
}

impl LocaleSelection {
    pub fn new(website: &Website, active: &str) -> Self {
        Self {
            active: active.to_owned(),
            default_lang: website.lang.clone(),
            supported: website.support_lang.clone(),
            labels: website.lang_map.clone(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    pub fn label_for(&self, code: &str) -> String {
        self.labels
            .get(code)
            .filter(|l| !l.is_empty())
            .cloned()
            .unwrap_or_else(|| FALLBACK_LANGUAGE_LABEL.to_owned())
    }

    pub fn active_label(&self) -> String {
        self.label_for(&self.active)
    }

    /// Whether the language control should render at all.
    pub fn is_multi(&self) -> bool {
        self.supported.len() > 1
    }

    fn is_default(&self) -> bool {
        self.active.is_empty() || self.active == self.default_lang
    }

    /// `current_path` with its leading supported-language segment replaced
    /// by `code`, or `code` inserted when there is none. Never ends in `/`.
    pub fn switch_path(&self, code: &str, current_path: &str) -> String {
        let mut segments: Vec<&str> = current_path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.first().is_some_and(|first| self.supported.iter().any(|l| l == first)) {
            segments.remove(0);
        }
        if segments.is_empty() {
            format!("/{code}")
        } else {
            format!("/{code}/{}", segments.join("/"))
        }
    }

    /// Record `code` as active, update `<html lang>` and navigate to the
    /// same page in that language. Returns the navigation target.
    pub fn change_language(&mut self, code: &str, current_path: &str) -> String {
        code.clone_into(&mut self.active);
        browser::set_document_lang(code);
        let target = self.switch_path(code, current_path);
        browser::navigate_to(&target);
        target
    }

    /// Site-relative `path` prefixed with the active language segment.
    /// Absolute `http(s)://` URLs and default-language paths pass through.
    pub fn url_with_lang(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        let normalized = if path.starts_with('/') { path.to_owned() } else { format!("/{path}") };
        if self.is_default() {
            normalized
        } else {
            format!("/{}{normalized}", self.active)
        }
    }

    /// Whether `current_path`, minus its leading active-language segment,
    /// is exactly `path`.
    pub fn match_path(&self, path: &str, current_path: &str) -> bool {
        let stripped = if self.active.is_empty() {
            current_path
        } else {
            let prefix = format!("/{}", self.active);
            match current_path.strip_prefix(&prefix) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
                _ => current_path,
            }
        };
        let stripped = if stripped.is_empty() { "/" } else { stripped };
        stripped == path
    }
}
