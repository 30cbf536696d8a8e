use dioxus::prelude::*;

mod components;
mod config;
mod database;
mod error;
mod models;
mod services;

use components::{ContactScreen, GalleryScreen, HomeScreen, JoinScreen, NavigationBar};
use config::SiteConfig;
use services::{FormRateLimiter, RelayClient};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dioxus::launch(App);
}

/// Screen navigation
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Screen {
    Home,
    Gallery,
    Join,
    Contact,
}

#[component]
fn App() -> Element {
    let mut current_screen = use_signal(|| Screen::Home);

    let config = use_hook(SiteConfig::load);
    use_context_provider(|| services::build_gallery(&config));
    use_context_provider(|| RelayClient::from_config(&config));
    use_context_provider(FormRateLimiter::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif; background: #0f172a; color: #e2e8f0;",

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Home => rsx! {
                        HomeScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Gallery => rsx! {
                        GalleryScreen {}
                    },
                    Screen::Join => rsx! {
                        JoinScreen {}
                    },
                    Screen::Contact => rsx! {
                        ContactScreen {}
                    },
                }
            }

            // Bottom Navigation Bar
            NavigationBar {
                current_screen: current_screen(),
                on_navigate: move |screen| current_screen.set(screen),
            }
        }
    }
}
