//! Contact form dialog.
//!
//! DESIGN
//! ======
//! The dialog's behavior lives in plain state-transition functions over
//! [`DialogState`] so the submit gating, validation, and close rules are
//! testable without a DOM. The component wires those transitions to the
//! form and hands the network call to [`send_contact`].
//!
//! While a send is in flight every input and button is disabled and the
//! dialog refuses to close. A failed send keeps the draft so the visitor
//! can retry; a successful one clears it, shows a confirmation view, and
//! closes the dialog after a short pause.

#[cfg(test)]
#[path = "contact_dialog_test.rs"]
mod contact_dialog_test;

use leptos::prelude::*;

use crate::components::icons::{
    CheckCircleIcon, LoaderIcon, MailIcon, MessageSquareIcon, SendIcon, SparklesIcon, UserIcon,
};
use crate::net::contact::{
    ContactSubmission, FieldErrors, api_base_url, field_errors, send_contact, sent_confirmation,
};
use crate::state::toast::{self, ToastLevel, ToastQueue};
use crate::state::ui::UiState;

/// Milliseconds the success view stays up before the dialog closes itself.
const SENT_CLOSE_MS: u32 = 3_000;

/// Where the submit flow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Everything the dialog tracks between renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialogState {
    pub draft: ContactSubmission,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

/// Record an edit. After a failed validation pass the messages track every
/// keystroke, so fixing a field clears its complaint immediately.
fn edit(state: &mut DialogState, apply: impl FnOnce(&mut ContactSubmission)) {
    apply(&mut state.draft);
    if !state.errors.is_clean() {
        state.errors = field_errors(&state.draft);
    }
}

/// Gate a submit attempt: refuse while one is already in flight, validate,
/// and move to `Sending` only when the draft is clean.
fn begin_submit(state: &mut DialogState) -> bool {
    if state.phase == SubmitPhase::Sending {
        return false;
    }
    state.errors = field_errors(&state.draft);
    if !state.errors.is_clean() {
        return false;
    }
    state.phase = SubmitPhase::Sending;
    true
}

/// The send came back good: clear the form and show the success view.
fn settle_success(state: &mut DialogState) {
    *state = DialogState {
        phase: SubmitPhase::Sent,
        ..DialogState::default()
    };
}

/// The send failed: back to idle with the draft intact for a retry.
fn settle_failure(state: &mut DialogState) {
    state.phase = SubmitPhase::Idle;
}

/// Closing is refused only while a send is in flight.
fn close_allowed(state: &DialogState) -> bool {
    state.phase != SubmitPhase::Sending
}

/// Clear everything so the next open starts fresh.
fn reset_for_close(state: &mut DialogState) {
    *state = DialogState::default();
}

/// Modal contact form, shown while `UiState::contact_open` is set.
#[component]
pub fn ContactDialog() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let dialog = RwSignal::new(DialogState::default());

    let on_close = Callback::new(move |()| {
        let mut allowed = false;
        dialog.update(|d| {
            allowed = close_allowed(d);
            if allowed {
                reset_for_close(d);
            }
        });
        if allowed {
            ui.update(|u| u.contact_open = false);
        }
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut proceed = false;
        dialog.update(|d| proceed = begin_submit(d));
        if !proceed {
            return;
        }
        let payload = dialog.with_untracked(|d| d.draft.clone());
        leptos::task::spawn_local(async move {
            match send_contact(api_base_url(), &payload).await {
                Ok(reply) => {
                    dialog.update(settle_success);
                    toast::notify(
                        toasts,
                        ToastLevel::Success,
                        "Message sent!",
                        &sent_confirmation(&reply),
                    );
                    gloo_timers::callback::Timeout::new(SENT_CLOSE_MS, move || {
                        ui.update(|u| u.contact_open = false);
                        dialog.update(reset_for_close);
                    })
                    .forget();
                }
                Err(err) => {
                    dialog.update(settle_failure);
                    toast::notify(toasts, ToastLevel::Error, err.title(), &err.notice());
                }
            }
        });
    };

    let sending = move || dialog.with(|d| d.phase == SubmitPhase::Sending);
    let error_text = move |pick: fn(&FieldErrors) -> &Option<String>| {
        dialog.with(|d| pick(&d.errors).clone().unwrap_or_default())
    };

    view! {
        <Show when=move || ui.get().contact_open>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--contact"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="dialog__head">
                        <span class="dialog__spark">
                            <SparklesIcon/>
                        </span>
                        <h2 class="dialog__title">"Get in Touch"</h2>
                    </div>
                    <p class="dialog__subtitle">
                        "Fill out the form below and I'll get back to you as soon as possible."
                    </p>

                    <Show
                        when=move || dialog.with(|d| d.phase == SubmitPhase::Sent)
                        fallback=move || {
                            view! {
                                <form class="contact-form" on:submit=on_submit>
                                    <div class="contact-form__field">
                                        <label class="contact-form__label" for="contact-name">
                                            <UserIcon class="icon--accent"/>
                                            "Name"
                                        </label>
                                        <input
                                            id="contact-name"
                                            class="contact-form__input"
                                            class:contact-form__input--invalid=move || {
                                                dialog.with(|d| d.errors.name.is_some())
                                            }
                                            placeholder="Enter your full name"
                                            prop:value=move || dialog.with(|d| d.draft.name.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                dialog.update(|d| edit(d, |draft| draft.name = value));
                                            }
                                            disabled=sending
                                        />
                                        <Show when=move || dialog.with(|d| d.errors.name.is_some())>
                                            <p class="contact-form__error">
                                                {move || error_text(|e| &e.name)}
                                            </p>
                                        </Show>
                                    </div>

                                    <div class="contact-form__field">
                                        <label class="contact-form__label" for="contact-email">
                                            <MailIcon class="icon--accent"/>
                                            "Email Address"
                                        </label>
                                        <input
                                            id="contact-email"
                                            class="contact-form__input"
                                            class:contact-form__input--invalid=move || {
                                                dialog.with(|d| d.errors.email.is_some())
                                            }
                                            type="email"
                                            placeholder="your.email@example.com"
                                            prop:value=move || dialog.with(|d| d.draft.email.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                dialog.update(|d| edit(d, |draft| draft.email = value));
                                            }
                                            disabled=sending
                                        />
                                        <Show when=move || dialog.with(|d| d.errors.email.is_some())>
                                            <p class="contact-form__error">
                                                {move || error_text(|e| &e.email)}
                                            </p>
                                        </Show>
                                    </div>

                                    <div class="contact-form__field">
                                        <label class="contact-form__label" for="contact-message">
                                            <MessageSquareIcon class="icon--accent"/>
                                            "Message"
                                        </label>
                                        <textarea
                                            id="contact-message"
                                            class="contact-form__input contact-form__input--area"
                                            class:contact-form__input--invalid=move || {
                                                dialog.with(|d| d.errors.message.is_some())
                                            }
                                            rows="6"
                                            placeholder="Tell me about your project or just say hello..."
                                            prop:value=move || dialog.with(|d| d.draft.message.clone())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                dialog.update(|d| edit(d, |draft| draft.message = value));
                                            }
                                            disabled=sending
                                        ></textarea>
                                        <Show when=move || dialog.with(|d| d.errors.message.is_some())>
                                            <p class="contact-form__error">
                                                {move || error_text(|e| &e.message)}
                                            </p>
                                        </Show>
                                    </div>

                                    <div class="dialog__actions">
                                        <button
                                            type="button"
                                            class="btn btn--outline"
                                            on:click=move |_| on_close.run(())
                                            disabled=sending
                                        >
                                            "Cancel"
                                        </button>
                                        <button type="submit" class="btn btn--primary" disabled=sending>
                                            <Show
                                                when=sending
                                                fallback=|| {
                                                    view! {
                                                        <SendIcon/>
                                                        "Send Message"
                                                    }
                                                }
                                            >
                                                <LoaderIcon/>
                                                "Sending..."
                                            </Show>
                                        </button>
                                    </div>
                                </form>
                            }
                        }
                    >
                        <div class="dialog__success">
                            <CheckCircleIcon class="icon--hero"/>
                            <h3 class="dialog__success-title">"Message Sent Successfully!"</h3>
                            <p class="dialog__success-copy">
                                "A confirmation email has been sent to your inbox."
                                <br/>
                                "I'll get back to you soon!"
                            </p>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
