use dioxus::prelude::*;

/// Labelled text input with an optional validation message
#[component]
pub fn FormField(
    label: String,
    value: String,
    #[props(default = None)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = false)] multiline: bool,
    on_input: EventHandler<String>,
) -> Element {
    let border = if error.is_some() { "#ff6b6b" } else { "#334155" };

    rsx! {
        div { style: "margin-bottom: 20px;",
            label { style: "display: block; margin-bottom: 6px; font-weight: 600; color: #e2e8f0; font-size: 14px;",
                "{label} *"
            }
            if multiline {
                textarea {
                    class: "input",
                    style: "min-height: 120px; border-color: {border};",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            } else {
                input {
                    r#type: "{input_type}",
                    class: "input",
                    style: "border-color: {border};",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| on_input.call(e.value()),
                }
            }
            if let Some(error) = error {
                p { style: "margin: 6px 0 0 0; font-size: 12px; color: #ff6b6b;", "{error}" }
            }
        }
    }
}

/// Outcome banner shown under a form
#[component]
pub fn SubmitStatus(status: Option<Result<String, String>>) -> Element {
    match status {
        Some(Ok(message)) => rsx! {
            div { style: "padding: 12px; border-radius: 8px; background: #064e3b; color: #6ee7b7; margin-bottom: 16px;",
                "✅ {message}"
            }
        },
        Some(Err(message)) => rsx! {
            div { style: "padding: 12px; border-radius: 8px; background: #4c1d1d; color: #fca5a5; margin-bottom: 16px;",
                "⚠️ {message}"
            }
        },
        None => rsx! {},
    }
}
