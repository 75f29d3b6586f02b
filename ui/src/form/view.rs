use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::content;
use crate::core::{platform, timing};
use crate::i18n::Locale;

use super::rules::Field;
use super::state::{ContactFormState, SubmitDecision, SubmitStatus};
use super::submit::{self, ContactPayload, SubmitError};

/// How long a success/error notice stays up before dismissing itself.
const NOTICE_DISMISS_MS: u64 = 5_000;

#[component]
pub fn ContactForm() -> Element {
    let state = use_signal(ContactFormState::default);
    // Subscribe to the global language code so labels and messages follow
    // the switcher.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ContactEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let state_ref = state.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ContactEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut state_signal = state_ref.clone();

            async move {
                while let Some(event) = rx.next().await {
                    let locale = locale_of(lang_code);
                    match event {
                        ContactEvent::Change(field, value) => {
                            state_signal.with_mut(|s| s.field_changed(field, value, locale));
                        }
                        ContactEvent::Blur(field) => {
                            state_signal.with_mut(|s| s.field_blurred(field, locale));
                        }
                        ContactEvent::Submit => {
                            let decision = state_signal.with_mut(|s| s.begin_submit(locale));
                            if decision == SubmitDecision::Proceed {
                                let payload = state_signal
                                    .with(|s| ContactPayload::from_values(&s.values));
                                queue_submission(sender_slot.clone(), payload);
                            }
                        }
                        ContactEvent::Resolved(result) => {
                            let ticket = match result {
                                Ok(()) => state_signal.with_mut(|s| s.complete_success()),
                                Err(err) => {
                                    log_submit_failure(&err);
                                    let message = crate::t!("form-error-message");
                                    state_signal.with_mut(|s| s.complete_failure(message))
                                }
                            };
                            queue_notice_dismiss(sender_slot.clone(), ticket);
                        }
                        ContactEvent::Dismiss => {
                            state_signal.with_mut(|s| s.dismiss_notice());
                        }
                        ContactEvent::NoticeElapsed { ticket } => {
                            state_signal.with_mut(|s| s.notice_elapsed(ticket));
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = {
        let coroutine = coroutine.clone();
        move |event: ContactEvent| {
            coroutine.send(event);
        }
    };

    let snapshot = state();
    let submitting = snapshot.is_submitting();

    rsx! {
        if snapshot.status == SubmitStatus::Succeeded {
            div {
                class: "modal-overlay",
                onclick: move |_| send_event(ContactEvent::Dismiss),
                div { class: "modal modal--success",
                    h3 { {crate::t!("form-success-title")} }
                    p { {crate::t!("form-success-message")} }
                    p { class: "modal__hint", {crate::t!("form-click-anywhere-close")} }
                }
            }
        }
        if let SubmitStatus::Failed(message) = &snapshot.status {
            div {
                class: "modal-overlay",
                onclick: move |_| send_event(ContactEvent::Dismiss),
                div { class: "modal modal--error",
                    h3 { {crate::t!("form-error-title")} }
                    p { "{message}" }
                    p { class: "modal__hint", {crate::t!("form-click-anywhere-close")} }
                }
            }
        }

        form {
            class: "contact-form",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                send_event(ContactEvent::Submit);
            },

            div { class: "contact-form__row",
                div { class: "form-field",
                    label { r#for: "contact-name",
                        {crate::t!("form-name")}
                        span { class: "form-field__required", " *" }
                    }
                    input {
                        id: "contact-name",
                        name: "name",
                        r#type: "text",
                        class: field_class(&snapshot, Field::Name),
                        value: "{snapshot.values.name}",
                        placeholder: crate::t!("form-name-placeholder"),
                        oninput: move |evt| send_event(ContactEvent::Change(Field::Name, evt.value())),
                        onfocusout: move |_| send_event(ContactEvent::Blur(Field::Name)),
                    }
                    if let Some(error) = snapshot.visible_error(Field::Name) {
                        p { class: "form-field__error", "{error}" }
                    }
                }
                div { class: "form-field",
                    label { r#for: "contact-company", {crate::t!("form-company")} }
                    input {
                        id: "contact-company",
                        name: "company",
                        r#type: "text",
                        class: field_class(&snapshot, Field::Company),
                        value: "{snapshot.values.company}",
                        placeholder: crate::t!("form-company-placeholder"),
                        oninput: move |evt| send_event(ContactEvent::Change(Field::Company, evt.value())),
                        onfocusout: move |_| send_event(ContactEvent::Blur(Field::Company)),
                    }
                    if let Some(error) = snapshot.visible_error(Field::Company) {
                        p { class: "form-field__error", "{error}" }
                    }
                }
            }

            div { class: "contact-form__row",
                div { class: "form-field",
                    label { r#for: "contact-email",
                        {crate::t!("form-email")}
                        span { class: "form-field__required", " *" }
                    }
                    input {
                        id: "contact-email",
                        name: "email",
                        r#type: "email",
                        class: field_class(&snapshot, Field::Email),
                        value: "{snapshot.values.email}",
                        placeholder: crate::t!("form-email-placeholder"),
                        oninput: move |evt| send_event(ContactEvent::Change(Field::Email, evt.value())),
                        onfocusout: move |_| send_event(ContactEvent::Blur(Field::Email)),
                    }
                    if let Some(error) = snapshot.visible_error(Field::Email) {
                        p { class: "form-field__error", "{error}" }
                    }
                }
                div { class: "form-field",
                    label { r#for: "contact-phone", {crate::t!("form-phone")} }
                    input {
                        id: "contact-phone",
                        name: "phone",
                        r#type: "tel",
                        class: field_class(&snapshot, Field::Phone),
                        value: "{snapshot.values.phone}",
                        placeholder: crate::t!("form-phone-placeholder"),
                        oninput: move |evt| send_event(ContactEvent::Change(Field::Phone, evt.value())),
                        onfocusout: move |_| send_event(ContactEvent::Blur(Field::Phone)),
                    }
                    if let Some(error) = snapshot.visible_error(Field::Phone) {
                        p { class: "form-field__error", "{error}" }
                    }
                }
            }

            div { class: "form-field",
                label { r#for: "contact-interest", {crate::t!("form-interest")} }
                select {
                    id: "contact-interest",
                    name: "interest",
                    class: "form-field__input",
                    value: "{snapshot.values.interest}",
                    oninput: move |evt| send_event(ContactEvent::Change(Field::Interest, evt.value())),
                    onfocusout: move |_| send_event(ContactEvent::Blur(Field::Interest)),
                    option { value: "", {crate::t!("form-interest-default")} }
                    {
                        content::interest_options().into_iter().map(|choice| {
                            rsx! {
                                option { key: "{choice.value}", value: "{choice.value}", "{choice.label}" }
                            }
                        })
                    }
                }
            }

            div { class: "form-field",
                label { r#for: "contact-message",
                    {crate::t!("form-message")}
                    span { class: "form-field__required", " *" }
                }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: 4,
                    class: field_class(&snapshot, Field::Message),
                    value: "{snapshot.values.message}",
                    placeholder: crate::t!("form-message-placeholder"),
                    oninput: move |evt| send_event(ContactEvent::Change(Field::Message, evt.value())),
                    onfocusout: move |_| send_event(ContactEvent::Blur(Field::Message)),
                }
                if let Some(error) = snapshot.visible_error(Field::Message) {
                    p { class: "form-field__error", "{error}" }
                }
            }

            p { class: "contact-form__legend",
                span { class: "form-field__required", "* " }
                {crate::t!("form-required-fields")}
            }

            button {
                r#type: "submit",
                class: "button button--primary contact-form__submit",
                disabled: submitting,
                if submitting {
                    span { class: "contact-form__spinner", aria_hidden: "true" }
                    {crate::t!("form-submitting")}
                } else {
                    {crate::t!("form-submit")}
                }
            }
        }
    }
}

/// Events flowing through the form coroutine.
#[derive(Debug)]
enum ContactEvent {
    Change(Field, String),
    Blur(Field),
    Submit,
    Resolved(Result<(), SubmitError>),
    Dismiss,
    NoticeElapsed { ticket: u64 },
}

/// Locale for validation messages, read from the global language signal
/// without subscribing (the coroutine is not a render scope).
fn locale_of(lang_code: Option<Signal<String>>) -> Locale {
    lang_code
        .map(|code| code.peek().clone())
        .as_deref()
        .and_then(Locale::from_tag)
        .unwrap_or_default()
}

fn field_class(state: &ContactFormState, field: Field) -> &'static str {
    if state.visible_error(field).is_some() {
        "form-field__input form-field__input--invalid"
    } else {
        "form-field__input"
    }
}

/// The one suspension point of the pipeline: fire the POST off-loop and post
/// the outcome back as an event. If the form unmounted in the meantime the
/// send lands in a closed channel and is dropped.
fn queue_submission(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ContactEvent>>>>,
    payload: ContactPayload,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            let result = submit::send_contact(&payload).await;
            let _ = sender.unbounded_send(ContactEvent::Resolved(result));
        });
    }
}

/// Schedule the auto-dismiss for the notice identified by `ticket`. The
/// state machine ignores stale tickets, so at most one pending dismissal is
/// ever effective.
fn queue_notice_dismiss(
    sender_slot: Rc<RefCell<Option<UnboundedSender<ContactEvent>>>>,
    ticket: u64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(NOTICE_DISMISS_MS).await;
            let _ = sender.unbounded_send(ContactEvent::NoticeElapsed { ticket });
        });
    }
}

fn log_submit_failure(err: &SubmitError) {
    // Status codes and transport causes stay in diagnostics; the visitor
    // only ever sees the translated generic message.
    eprintln!("[contact] submission failed: {err}");
}
