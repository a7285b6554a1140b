//! Cursor-following glow overlay.

use leptos::prelude::*;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::Closure;

/// Full-viewport radial gradient centered on the pointer.
///
/// Purely decorative: the layer ignores pointer events and sits under the
/// dialog layer. The listener stays attached for the page's lifetime.
#[component]
pub fn MouseGlow() -> impl IntoView {
    let pointer = RwSignal::new((0i32, 0i32));

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            pointer.set((ev.client_x(), ev.client_y()));
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        if window
            .add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    });

    let glow_style = move || {
        let (x, y) = pointer.get();
        format!(
            "background: radial-gradient(800px circle at {x}px {y}px, \
             rgba(59, 130, 246, 0.15), rgba(147, 51, 234, 0.1), transparent 50%);"
        )
    };

    view! { <div class="mouse-glow" style=glow_style></div> }
}
