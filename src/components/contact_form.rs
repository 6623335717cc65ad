//! Contact Form Component
//!
//! Name, email, message and a consent checkbox. Submission goes through the
//! core `ContactController`; the status line mirrors every state change.

use dioxus::prelude::*;
use folio_core::contact::{CONSENT_FIELD, DEFAULT_TIMEOUT};
use folio_core::{
    local_outcome, ContactController, ContactForm, ContactState, HttpTransport, DIAGNOSTICS_TARGET,
};
use folio_ui::{Button, Checkbox, Input, TextArea};

use crate::context::{use_app_config, use_diagnostics};

#[component]
pub fn ContactFormView() -> Element {
    let config = use_app_config();
    let diagnostics = use_diagnostics();

    let controller = use_hook(|| match HttpTransport::new(DEFAULT_TIMEOUT) {
        Ok(transport) => Some(ContactController::new(transport)),
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            None
        }
    });

    let mut form = use_signal(|| {
        ContactForm::standard(config.contact_action.clone(), config.contact_method)
    });
    let mut status = use_signal(ContactState::default);

    let sending = matches!(status(), ContactState::Sending);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if matches!(status(), ContactState::Sending) {
            return;
        }
        if let Some(state) = local_outcome(&form.read(), controller.is_some()) {
            status.set(state);
            return;
        }
        let Some(controller) = controller.clone() else {
            return;
        };

        let diagnostics = diagnostics.clone();
        spawn(async move {
            // Submit a copy; the live form is replaced only once it was reset
            let mut draft = form();
            let outcome = controller
                .submit(&mut draft, |state| status.set(state.clone()))
                .await;
            match outcome {
                ContactState::Sent => form.set(draft),
                ContactState::NetworkError => {
                    let recorded = diagnostics.for_target(DIAGNOSTICS_TARGET).len();
                    tracing::debug!(recorded, "Contact failure kept in diagnostics");
                }
                _ => {}
            }
        });
    };

    let (action, method) = {
        let current = form.read();
        (current.action().to_string(), current.method().as_str())
    };
    let status_text = status.read().status_text().to_string();

    rsx! {
        form {
            id: "contactForm",
            class: "contact-form",
            action: "{action}",
            method: "{method}",
            onsubmit: on_submit,

            Input {
                name: "name".to_string(),
                label: "Name".to_string(),
                value: form.read().text("name").to_string(),
                required: true,
                oninput: move |value: String| {
                    form.write().set_text("name", value);
                },
            }
            Input {
                name: "email".to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                value: form.read().text("email").to_string(),
                required: true,
                oninput: move |value: String| {
                    form.write().set_text("email", value);
                },
            }
            TextArea {
                name: "message".to_string(),
                label: "Message".to_string(),
                value: form.read().text("message").to_string(),
                required: true,
                oninput: move |value: String| {
                    form.write().set_text("message", value);
                },
            }
            Checkbox {
                id: CONSENT_FIELD.to_string(),
                checked: form.read().consent(),
                label: "I agree to be contacted back about my message.".to_string(),
                onchange: move |checked: bool| form.write().set_consent(checked),
            }

            Button {
                button_type: "submit".to_string(),
                disabled: sending,
                if sending { "Sending…" } else { "Send message" }
            }

            p {
                id: "formStatus",
                class: "form-status",
                role: "status",
                "aria-live": "polite",
                "{status_text}"
            }
        }
    }
}
