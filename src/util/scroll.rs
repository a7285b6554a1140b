//! Thin wrappers over the window scroll APIs. Browser-only; every call is
//! best-effort and no-ops when the window is unavailable.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Current vertical scroll offset, zero outside a browser.
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the page back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
