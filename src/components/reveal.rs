//! Scroll-triggered reveal wrapper.
//!
//! Wraps a block that should fade in the first time it scrolls into view.
//! Observation stops after the first reveal, so re-scrolling never replays
//! the entrance. Without an `IntersectionObserver` (or if construction
//! fails) the block is simply shown.

use leptos::prelude::*;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::Closure;

/// Fades `children` in on first viewport entry.
#[component]
pub fn Reveal(
    /// Additional CSS classes on the wrapper.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let shown = RwSignal::new(false);

    Effect::new(move || {
        let Some(host) = host_ref.get() else {
            return;
        };
        if shown.get_untracked() {
            return;
        }

        let cb = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let hit = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<web_sys::IntersectionObserverEntry>()
                        .is_ok_and(|e| e.is_intersecting())
                });
                if hit {
                    shown.set(true);
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        match web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&host);
                cb.forget();
            }
            Err(_) => shown.set(true),
        }
    });

    view! {
        <div
            node_ref=host_ref
            class=format!("reveal {class}")
            class:reveal--visible=move || shown.get()
        >
            {children()}
        </div>
    }
}
