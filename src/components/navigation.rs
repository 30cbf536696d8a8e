use crate::Screen;
use dioxus::prelude::*;

const ACTIVE: &str = "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #00b8c4; color: #0f172a;";
const INACTIVE: &str = "flex: 1; padding: 12px; margin: 0 5px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; text-align: center; background: #1e293b; color: #e2e8f0;";

#[component]
pub fn NavigationBar(current_screen: Screen, on_navigate: EventHandler<Screen>) -> Element {
    let nav_style = "display: flex; justify-content: space-around; padding: 10px; background: #0b1120; border-top: 1px solid #1e293b;";
    let entries = [
        (Screen::Home, "🏠 Home"),
        (Screen::Gallery, "📸 Gallery"),
        (Screen::Join, "🚀 Join"),
        (Screen::Contact, "✉️ Contact"),
    ];

    rsx! {
        div {
            style: "{nav_style}",
            for (screen, label) in entries {
                button {
                    key: "{label}",
                    style: if current_screen == screen { ACTIVE } else { INACTIVE },
                    onclick: move |_| on_navigate.call(screen),
                    "{label}"
                }
            }
        }
    }
}
