use crate::components::field::{FormField, SubmitStatus};
use crate::error::AppError;
use crate::models::forms::error_for;
use crate::models::{FieldError, JoinForm};
use crate::services::{FormRateLimiter, RelayClient};
use dioxus::prelude::*;

const FORM_KEY: &str = "join";

#[component]
pub fn JoinScreen() -> Element {
    let relay = use_context::<RelayClient>();
    let limiter = use_context::<FormRateLimiter>();
    let mut form = use_signal(JoinForm::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut status = use_signal(|| None::<Result<String, String>>);
    let mut submitting = use_signal(|| false);

    let field_error = move |field: &str| error_for(&errors.read(), field).map(str::to_string);

    let submit = move |_| {
        status.set(None);
        let current = form();
        if let Err(field_errors) = current.validate() {
            errors.set(field_errors);
            status.set(Some(Err("Please fix all errors before submitting".to_string())));
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
            match relay.submit_join(&current).await {
                Ok(message) => {
                    status.set(Some(Ok(message)));
                    form.set(JoinForm::default());
                }
                Err(e) => {
                    log::error!("Join submission failed: {}", e);
                    status.set(Some(Err(e.user_message())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { style: "padding: 16px; max-width: 600px; margin: 0 auto;",
            h1 { style: "color: #00f5ff; text-align: center; margin: 32px 0 8px 0; font-size: 28px;",
                "🚀 Join the Club"
            }
            p { style: "text-align: center; color: #94a3b8; margin-bottom: 24px;",
                "Tell us a little about yourself and we'll get back to you."
            }

            div { class: "card",
                FormField {
                    label: "Full Name",
                    value: form.read().fullname.clone(),
                    error: field_error("fullname"),
                    on_input: move |v| form.write().fullname = v,
                }
                FormField {
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: form.read().email.clone(),
                    error: field_error("email"),
                    on_input: move |v| form.write().email = v,
                }
                FormField {
                    label: "Branch",
                    placeholder: "CSE, IT, ECE...",
                    value: form.read().branch.clone(),
                    error: field_error("branch"),
                    on_input: move |v| form.write().branch = v,
                }

                div { style: "margin-bottom: 20px;",
                    label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #e2e8f0; font-size: 14px;",
                        "Year *"
                    }
                    select {
                        class: "input",
                        value: "{form.read().year}",
                        onchange: move |e| form.write().year = e.value(),
                        option { value: "", "Select year" }
                        option { value: "1", "1st Year" }
                        option { value: "2", "2nd Year" }
                        option { value: "3", "3rd Year" }
                        option { value: "4", "4th Year" }
                    }
                    if let Some(error) = field_error("year") {
                        p { style: "margin: 6px 0 0 0; font-size: 12px; color: #ff6b6b;", "{error}" }
                    }
                }

                FormField {
                    label: "Skills",
                    placeholder: "Python, TensorFlow, ...",
                    value: form.read().skills.clone(),
                    error: field_error("skills"),
                    on_input: move |v| form.write().skills = v,
                }
                FormField {
                    label: "Why do you want to join?",
                    multiline: true,
                    value: form.read().reason.clone(),
                    error: field_error("reason"),
                    on_input: move |v| form.write().reason = v,
                }

                SubmitStatus { status: status() }

                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 16px; font-size: 16px;",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() {
                        "⏳ Submitting..."
                    } else {
                        "Submit Application"
                    }
                }
            }
        }
    }
}
