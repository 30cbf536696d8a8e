use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        div { style: "padding: 16px; max-width: 800px; margin: 0 auto;",
            div { style: "text-align: center; margin: 48px 0 32px 0;",
                h1 { style: "color: #00f5ff; font-size: 36px; font-weight: 700; margin: 0 0 8px 0;",
                    "🤖 AI & ML Club"
                }
                p { style: "color: #94a3b8; font-size: 16px; margin: 0 0 4px 0;",
                    "Oriental College of Technology"
                }
                p { style: "color: #00ff88; font-style: italic; margin: 0;",
                    "Innovate • Implement • Inspire"
                }
            }

            div { class: "card", style: "margin-bottom: 16px;",
                h2 { style: "margin: 0 0 12px 0; font-size: 20px; color: #e2e8f0;", "About us" }
                p { style: "color: #cbd5e1; line-height: 1.6; margin: 0;",
                    "We are a student community exploring artificial intelligence and machine learning \
                     through hands-on workshops, hackathons and team projects. Everyone curious about \
                     building intelligent systems is welcome, whatever their branch or year."
                }
            }

            div { class: "card",
                h2 { style: "margin: 0 0 16px 0; font-size: 20px; color: #e2e8f0;", "Get involved" }
                div { style: "display: flex; flex-direction: column; gap: 12px;",
                    button {
                        class: "btn-primary",
                        style: "padding: 16px; font-size: 16px;",
                        onclick: move |_| on_navigate.call(Screen::Join),
                        "🚀 Apply for membership"
                    }
                    button {
                        class: "btn-secondary",
                        style: "padding: 16px; font-size: 16px;",
                        onclick: move |_| on_navigate.call(Screen::Gallery),
                        "📸 See what we've been up to"
                    }
                    button {
                        class: "btn-secondary",
                        style: "padding: 16px; font-size: 16px;",
                        onclick: move |_| on_navigate.call(Screen::Contact),
                        "✉️ Get in touch"
                    }
                }
            }
        }
    }
}
