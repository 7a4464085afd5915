//! Thin wrappers over `window`/`document` side effects.
//!
//! Every state change that must be visible to already-mounted components
//! (login, logout, language change, filter/page change) goes through a full
//! navigation or reload from here. On the server these are no-ops.

/// Perform a full-page navigation to `href`.
pub fn navigate_to(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Current vertical scroll offset, `0.0` when unavailable.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Set `<html lang>`.
pub fn set_document_lang(code: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", code);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
    }
}

#[cfg(feature = "hydrate")]
fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Suppresses background page scroll while held.
#[derive(Debug)]
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        #[cfg(feature = "hydrate")]
        set_body_overflow("hidden");
        Self { _private: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        set_body_overflow("");
    }
}
