//! Browser glue: document attributes, media queries, viewport scrolling.
//!
//! Every function is a no-op (or returns the neutral value) off the browser so
//! components render the same tree under native test runs.

use futures_channel::mpsc::UnboundedSender;

use crate::core::preferences::Preferences;

/// Class toggled on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Reflect preferences onto `<html>`: `lang` attribute and the dark-mode class.
pub fn apply_preferences(prefs: Preferences) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("lang", prefs.language.code());
        let _ = root
            .class_list()
            .toggle_with_force(DARK_CLASS, prefs.theme.is_dark());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = prefs;
    }
}

/// The user agent's "prefers dark color scheme" signal.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Smoothly scroll the element with id `id` into view. Returns false when no
/// such element exists, so callers can let the native jump happen instead.
pub fn scroll_to_fragment(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

/// Window `scroll` listener forwarding the vertical offset into a channel.
///
/// The listener is removed when the watch is dropped.
pub struct ScrollWatch {
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut()>,
    #[cfg(not(target_arch = "wasm32"))]
    _sender: UnboundedSender<f64>,
}

impl ScrollWatch {
    /// Register the listener and immediately report the current offset.
    #[cfg(target_arch = "wasm32")]
    pub fn install(sender: UnboundedSender<f64>) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let _ = sender.unbounded_send(window.scroll_y().unwrap_or(0.0));

        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                let _ = sender.unbounded_send(offset);
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { callback })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn install(sender: UnboundedSender<f64>) -> Option<Self> {
        let _ = sender.unbounded_send(0.0);
        Some(Self { _sender: sender })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollWatch {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        }
    }
}
