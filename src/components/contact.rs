use crate::components::field::{FormField, SubmitStatus};
use crate::error::AppError;
use crate::models::forms::error_for;
use crate::models::{ContactForm, FieldError};
use crate::services::{FormRateLimiter, RelayClient};
use dioxus::prelude::*;

const FORM_KEY: &str = "contact";

#[component]
pub fn ContactScreen() -> Element {
    let relay = use_context::<RelayClient>();
    let limiter = use_context::<FormRateLimiter>();
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut status = use_signal(|| None::<Result<String, String>>);
    let mut submitting = use_signal(|| false);

    let field_error = move |field: &str| error_for(&errors.read(), field).map(str::to_string);

    let submit = move |_| {
        status.set(None);
        let current = form();
        if let Err(field_errors) = current.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(Vec::new());

        if !limiter.try_attempt(FORM_KEY) {
            status.set(Some(Err(AppError::RateLimited.user_message())));
            return;
        }

        submitting.set(true);
        let relay = relay.clone();
        spawn(async move {
            match relay.submit_contact(&current).await {
                Ok(message) => {
                    status.set(Some(Ok(message)));
                    form.set(ContactForm::default());
                }
                Err(e) => {
                    log::error!("Contact submission failed: {}", e);
                    status.set(Some(Err(e.user_message())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto;",
            h1 { style: "color: #00f5ff; text-align: center; margin: 32px 0 24px 0; font-size: 28px;",
                "✉️ Contact Us"
            }

            div { class: "card",
                FormField {
                    label: "Name",
                    value: form.read().name.clone(),
                    error: field_error("name"),
                    on_input: move |v| form.write().name = v,
                }
                FormField {
                    label: "Email",
                    input_type: "email",
                    value: form.read().email.clone(),
                    error: field_error("email"),
                    on_input: move |v| form.write().email = v,
                }
                FormField {
                    label: "Subject",
                    value: form.read().subject.clone(),
                    error: field_error("subject"),
                    on_input: move |v| form.write().subject = v,
                }
                FormField {
                    label: "Message",
                    multiline: true,
                    value: form.read().message.clone(),
                    error: field_error("message"),
                    on_input: move |v| form.write().message = v,
                }

                SubmitStatus { status: status() }

                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 16px; font-size: 16px;",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() {
                        "⏳ Sending..."
                    } else {
                        "Send Message"
                    }
                }
            }
        }
    }
}
