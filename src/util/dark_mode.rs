//! Theme application on the `<html>` element and system color-scheme probing.
//!
//! The stored preference itself lives in `state::theme`; this module only
//! touches the document. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op so server rendering stays deterministic (always dark,
//! the default); the client corrects it right after hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Add or remove the `dark` class on `<html>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if dark {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Whether the OS/browser currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Subscription to system color-scheme changes; unsubscribes on drop.
pub struct SystemThemeListener {
    #[cfg(feature = "hydrate")]
    attached: Option<(
        web_sys::MediaQueryList,
        wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
    )>,
}

impl SystemThemeListener {
    /// Call `on_change(prefers_dark)` whenever the system scheme flips.
    pub fn attach<F>(on_change: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(mq) = web_sys::window().and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten()) else {
                return Self { attached: None };
            };
            let closure = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
                on_change(ev.matches());
            }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
            if mq
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .is_err()
            {
                return Self { attached: None };
            }
            Self {
                attached: Some((mq, closure)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            Self {}
        }
    }
}

impl Drop for SystemThemeListener {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            if let Some((mq, closure)) = self.attached.take() {
                let _ = mq.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            }
        }
    }
}
