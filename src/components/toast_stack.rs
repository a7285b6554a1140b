//! Corner notification stack.

use leptos::prelude::*;

use crate::state::toast::{self, ToastLevel, ToastQueue};

/// Renders the live toast list from context.
///
/// Toasts arrive through [`toast::notify`] and leave either by their
/// auto-dismiss timer or the close button here.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-stack" aria-live="polite" aria-relevant="additions removals">
            <For
                each=move || toasts.get().entries
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    let class = match t.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class>
                            <div class="toast__copy">
                                <div class="toast__title">{t.title}</div>
                                <div class="toast__body">{t.body}</div>
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|q| toast::dismiss(q, id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
